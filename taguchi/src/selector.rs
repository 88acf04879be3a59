//! Array selector: picks the smallest catalog array that fits a
//! definition, preferring an exact base-level match and a "good margin"
//! column surplus.

use crate::catalog::{self, OrthogonalArray};
use crate::columns::total_cols;
use crate::error::Error;
use crate::factor::Definition;

/// A margin is "good" when the surplus of columns over what's needed is
/// between 50% and 200%.
fn is_good_margin(needed: usize, available: usize) -> bool {
    if needed == 0 {
        return false;
    }
    let margin_pct = (available - needed) * 100 / needed;
    (50..=200).contains(&margin_pct)
}

fn margin_pct(needed: usize, available: usize) -> usize {
    if needed == 0 {
        0
    } else {
        (available - needed) * 100 / needed
    }
}

/// Picks the candidate with the strictly highest margin percentage out of
/// `candidates`, keeping the first-seen (catalog-order) candidate on a tie,
/// matching `generator.c`'s `margin_pct > best_margin_pct` comparison.
fn best_margin<'a>(
    candidates: impl Iterator<Item = &'a OrthogonalArray>,
    def: &Definition,
) -> Option<&'a OrthogonalArray> {
    candidates.fold(None, |best, candidate| match best {
        None => Some(candidate),
        Some(current) => {
            let current_margin = margin_pct(total_cols(def, current.base()), current.cols());
            let candidate_margin = margin_pct(total_cols(def, candidate.base()), candidate.cols());
            if candidate_margin > current_margin {
                Some(candidate)
            } else {
                Some(current)
            }
        }
    })
}

/// Selects the best-fit catalog array for `def`, following this priority
/// order:
///
/// 1. Among exact-base candidates (`array.base() == def.max_level_count()`),
///    prefer a good-margin one; among those, the largest `R`; among
///    not-good-margin ones, the smallest `R`.
/// 2. Else, among candidates within 4x the smallest fit's row count, the
///    good-margin one with the highest margin percentage.
/// 3. Else, the smallest-fit candidate.
/// 4. Else, [`Error::Capacity`].
///
/// # Errors
///
/// Returns [`Error::Capacity`] if no catalog array has enough columns
/// (after pairing) for every factor in `def`.
pub fn select_array(def: &Definition) -> Result<&'static OrthogonalArray, Error> {
    let max_level = def.max_level_count();

    let candidates: Vec<&OrthogonalArray> = catalog::all()
        .iter()
        .filter(|a| total_cols(def, a.base()) <= a.cols())
        .collect();

    if candidates.is_empty() {
        return Err(Error::Capacity {
            factor_count: def.factors().len(),
            max_level,
        });
    }

    let smallest_fit_rows = candidates
        .iter()
        .map(|a| a.rows())
        .min()
        .expect("candidates is non-empty");

    let exact: Vec<&OrthogonalArray> = candidates
        .iter()
        .copied()
        .filter(|a| a.base() == max_level as u32)
        .collect();

    if !exact.is_empty() {
        let needed_of = |a: &OrthogonalArray| total_cols(def, a.base());
        let good: Vec<&OrthogonalArray> = exact
            .iter()
            .copied()
            .filter(|a| is_good_margin(needed_of(a), a.cols()))
            .collect();

        let chosen = if good.is_empty() {
            // No good-margin exact match: smallest R among exact matches.
            exact
                .iter()
                .copied()
                .min_by_key(|a| a.rows())
                .expect("exact is non-empty")
        } else {
            // Good-margin exact matches: largest R (most statistical
            // headroom).
            good.iter()
                .copied()
                .max_by_key(|a| a.rows())
                .expect("good is non-empty")
        };
        return Ok(chosen);
    }

    let within_4x: Vec<&OrthogonalArray> = candidates
        .iter()
        .copied()
        .filter(|a| a.rows() <= 4 * smallest_fit_rows)
        .collect();

    let good_within_4x = within_4x
        .iter()
        .copied()
        .filter(|a| is_good_margin(total_cols(def, a.base()), a.cols()));

    if let Some(chosen) = best_margin(good_within_4x, def) {
        return Ok(chosen);
    }

    Ok(candidates
        .into_iter()
        .min_by_key(OrthogonalArray::rows)
        .expect("candidates is non-empty"))
}
