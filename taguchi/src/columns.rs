//! Column-needs calculator: how many OA columns a k-level factor needs in
//! a given base.

use crate::factor::Definition;

/// Smallest `k >= 1` with `p^k >= levels`, i.e. `ceil(log_p(levels))`.
///
/// By convention `cols(levels, base) == 1` when `levels <= 1` or
/// `base <= 1`.
#[must_use]
pub fn cols(levels: usize, base: u32) -> usize {
    if levels <= 1 || base <= 1 {
        return 1;
    }
    let mut capacity: u64 = 1;
    let mut k = 0usize;
    while capacity < levels as u64 {
        capacity *= u64::from(base);
        k += 1;
    }
    k.max(1)
}

/// Total OA columns a definition needs in a given base, summed over all
/// factors.
#[must_use]
pub fn total_cols(def: &Definition, base: u32) -> usize {
    def.factors()
        .iter()
        .map(|f| cols(f.level_count(), base))
        .sum()
}
