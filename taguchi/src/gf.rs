//! Minimal GF(p) machinery needed by the array generator.
//!
//! `p` is always a small prime (2, 3, or 5), so "the field GF(p)" is simply
//! `{0, .., p-1}` under addition and multiplication modulo `p` — no
//! polynomial-basis extension field is needed here.

/// Decodes `value` into an `n`-digit base-`p` tuple with the most
/// significant digit at index 0: `x = (x0, .., x_{n-1})`, `x0` most
/// significant.
pub(crate) fn decode_base_p(mut value: u64, n: usize, p: u32) -> Vec<u8> {
    let mut digits = vec![0u8; n];
    for pos in (0..n).rev() {
        digits[pos] = u8::try_from(value % u64::from(p)).expect("digit fits in u8 for p <= 5");
        value /= u64::from(p);
    }
    digits
}

/// The big-endian base-`p` numeric value of a digit tuple (MSB at index 0),
/// used to rank non-unit canonical column vectors.
fn big_endian_value(digits: &[u8], p: u32) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc * u64::from(p) + u64::from(d))
}

/// Enumerates the canonical column vectors of length `n` over GF(p): every
/// non-zero vector whose first non-zero component equals 1, ordered as the
/// unit vectors `e0, .., e_{n-1}` (index order) followed by the remaining
/// canonical vectors in ascending order of their base-p digit
/// representation.
///
/// Returns exactly `(p^n - 1) / (p - 1)` vectors.
pub(crate) fn canonical_column_vectors(n: usize, p: u32) -> Vec<Vec<u8>> {
    let mut units = Vec::with_capacity(n);
    let mut rest = Vec::new();

    for k in 0..n {
        let free_len = n - 1 - k;
        let free_count = u64::from(p).pow(u32::try_from(free_len).expect("n is small"));

        for idx in 0..free_count {
            let mut vector = vec![0u8; n];
            vector[k] = 1;
            let free_digits = decode_base_p(idx, free_len, p);
            vector[k + 1..n].copy_from_slice(&free_digits);

            if idx == 0 {
                units.push(vector);
            } else {
                rest.push(vector);
            }
        }
    }

    rest.sort_by_key(|v| big_endian_value(v, p));
    units.into_iter().chain(rest).collect()
}

#[cfg(test)]
mod tests {
    use super::{big_endian_value, canonical_column_vectors, decode_base_p};

    #[test]
    fn decode_base_p_msb_first() {
        // 5 in base 2 with 3 digits is 1,0,1 with the 1 (MSB) at index 0.
        assert_eq!(decode_base_p(5, 3, 2), vec![1, 0, 1]);
    }

    #[test]
    fn canonical_vectors_count_matches_column_formula() {
        for &(n, p) in &[(2, 2), (3, 2), (2, 3), (4, 2), (3, 3), (2, 5)] {
            let vectors = canonical_column_vectors(n, p);
            let expected = (u64::from(p).pow(n as u32) - 1) / u64::from(p - 1);
            assert_eq!(vectors.len() as u64, expected, "n={n} p={p}");
        }
    }

    #[test]
    fn unit_vectors_come_first_in_index_order() {
        let vectors = canonical_column_vectors(3, 2);
        assert_eq!(&vectors[0], &[1, 0, 0]);
        assert_eq!(&vectors[1], &[0, 1, 0]);
        assert_eq!(&vectors[2], &[0, 0, 1]);
    }

    #[test]
    fn remaining_vectors_are_canonical_and_ascending() {
        let vectors = canonical_column_vectors(3, 2);
        for v in &vectors[3..] {
            let first_nonzero = v.iter().find(|&&d| d != 0);
            assert_eq!(first_nonzero, Some(&1));
        }
        let values: Vec<u64> = vectors[3..].iter().map(|v| big_endian_value(v, 2)).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
    }
}
