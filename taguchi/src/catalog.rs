//! The orthogonal-array catalog and its Rao-Hamming generator.

use std::sync::OnceLock;

use ndarray::Array2;

use crate::gf::{canonical_column_vectors, decode_base_p};

/// The prime base levels this crate knows how to generate arrays over.
const PRIMES: [u32; 3] = [2, 3, 5];
/// For each prime, the exponents `n` (with `p^n` rows) this crate supports.
/// Chosen so the resulting array names match the documented catalog:
/// L4..L1024 (p=2), L9..L2187 (p=3), L25..L3125 (p=5).
const EXPONENTS: [usize; 9] = [2, 3, 4, 5, 6, 7, 8, 9, 10];

/// A constant Rao-Hamming orthogonal array L(pⁿ): `rows` = `p^n`, `cols` =
/// `(p^n - 1) / (p - 1)`, every cell in `[0, p)`.
///
/// # Invariant
///
/// For every pair of distinct columns `(c1, c2)` and every `(a, b)` in
/// `[0, p) x [0, p)`, the number of rows where `(cell(r, c1), cell(r, c2))
/// == (a, b)` is exactly `rows / p^2`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrthogonalArray {
    name: String,
    rows: usize,
    cols: usize,
    base: u32,
    data: Array2<u8>,
}

impl OrthogonalArray {
    fn generate(p: u32, n: usize) -> Self {
        let rows = usize::try_from((u64::from(p)).pow(u32::try_from(n).expect("n is small")))
            .expect("row count fits in usize for supported (p, n)");
        let columns = canonical_column_vectors(n, p);
        let cols = columns.len();

        let mut data = Array2::<u8>::zeros((rows, cols));
        for r in 0..rows {
            let x = decode_base_p(r as u64, n, p);
            for (c, v) in columns.iter().enumerate() {
                let cell: u32 = v
                    .iter()
                    .zip(x.iter())
                    .map(|(&vk, &xk)| u32::from(vk) * u32::from(xk))
                    .sum();
                data[[r, c]] = u8::try_from(cell % p).expect("residue mod p fits in u8");
            }
        }

        Self {
            name: format!("L{rows}"),
            rows,
            cols,
            base: p,
            data,
        }
    }

    /// The array's name, e.g. `"L81"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows (runs), `p^n`.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `(p^n - 1) / (p - 1)`.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The base level `p`.
    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The value of cell `(row, col)`, in `[0, base())`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()` or `col >= self.cols()`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.data[[row, col]]
    }
}

fn build_catalog() -> Vec<OrthogonalArray> {
    tracing::debug!("populating orthogonal array catalog");
    let mut arrays = Vec::with_capacity(PRIMES.len() * EXPONENTS.len());
    for &p in &PRIMES {
        for &n in &EXPONENTS {
            let rows = (u64::from(p)).pow(u32::try_from(n).unwrap());
            // Cap generation to the documented supported set (rows <= 3125).
            if rows > 3125 {
                continue;
            }
            arrays.push(OrthogonalArray::generate(p, n));
        }
    }
    arrays.sort_by_key(|a| a.rows());
    arrays
}

static CATALOG: OnceLock<Vec<OrthogonalArray>> = OnceLock::new();

fn catalog() -> &'static [OrthogonalArray] {
    CATALOG.get_or_init(build_catalog)
}

/// Looks up an array by its exact, case-sensitive name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OrthogonalArray> {
    catalog().iter().find(|a| a.name() == name)
}

/// Lists the names of every catalog array, in ascending row-count order —
/// the same order the catalog is built in, stable across calls.
#[must_use]
pub fn list_names() -> Vec<&'static str> {
    catalog().iter().map(OrthogonalArray::name).collect()
}

/// Returns `(rows, cols, base)` for a catalog array, or `None` if unknown.
#[must_use]
pub fn info(name: &str) -> Option<(usize, usize, u32)> {
    lookup(name).map(|a| (a.rows(), a.cols(), a.base()))
}

/// All catalog arrays, in the same stable order as [`list_names`].
#[must_use]
pub fn all() -> &'static [OrthogonalArray] {
    catalog()
}
