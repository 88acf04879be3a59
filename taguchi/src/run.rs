//! Run generator: maps factors onto OA columns and decodes each
//! row into a concrete level assignment per factor.

use crate::catalog::{self, OrthogonalArray};
use crate::columns::cols;
use crate::error::Error;
use crate::factor::Definition;
use crate::selector::select_array;

/// One 1-indexed row of the experiment schedule: a full assignment of a
/// level value to every factor, in the definition's factor order.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    run_id: usize,
    assignments: Vec<(String, String)>,
}

impl Run {
    /// 1-based position of this run in the schedule.
    #[must_use]
    pub fn run_id(&self) -> usize {
        self.run_id
    }

    /// `(factor_name, level_value)` pairs, in factor order.
    #[must_use]
    pub fn assignments(&self) -> &[(String, String)] {
        &self.assignments
    }

    /// The level value assigned to `factor_name` in this run, if present.
    #[must_use]
    pub fn value_of(&self, factor_name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(name, _)| name == factor_name)
            .map(|(_, value)| value.as_str())
    }
}

/// Per-factor column assignment: the first OA column a factor occupies and
/// how many contiguous columns it occupies.
struct ColumnMap {
    start: usize,
    count: usize,
}

fn assign_columns(def: &Definition, base: u32) -> Vec<ColumnMap> {
    let mut next = 0;
    def.factors()
        .iter()
        .map(|f| {
            let count = cols(f.level_count(), base);
            let map = ColumnMap { start: next, count };
            next += count;
            map
        })
        .collect()
}

/// Decodes the OA row `row` for one factor given its column map, combining
/// paired columns big-endian in the array's base, then wraps modulo
/// the factor's level count.
fn decode_level_index(array: &OrthogonalArray, row: usize, map: &ColumnMap, level_count: usize) -> usize {
    let base = u64::from(array.base());
    let mut raw: u64 = 0;
    for c in map.start..map.start + map.count {
        raw = raw * base + u64::from(array.cell(row, c));
    }
    (raw % level_count as u64) as usize
}

/// Generates the full run schedule for `def` against an explicitly named
/// array.
///
/// # Errors
///
/// Returns [`Error::UnknownArray`] if `array_name` is not in the catalog, or
/// [`Error::ColumnOverflow`] if the array is too small once column pairing
/// is taken into account.
pub fn generate_with_array(def: &Definition, array_name: &str) -> Result<Vec<Run>, Error> {
    let array = catalog::lookup(array_name)
        .ok_or_else(|| Error::UnknownArray(array_name.to_owned()))?;
    generate_against(def, array)
}

/// Generates the full run schedule for `def`, auto-selecting the array via
/// [`select_array`] when `def` has no explicit array name, or using
/// the explicit one otherwise.
///
/// # Errors
///
/// See [`generate_with_array`] and [`select_array`].
pub fn generate(def: &Definition) -> Result<Vec<Run>, Error> {
    match def.array_name() {
        Some(name) => generate_with_array(def, name),
        None => {
            let array = select_array(def)?;
            generate_against(def, array)
        }
    }
}

fn generate_against(def: &Definition, array: &OrthogonalArray) -> Result<Vec<Run>, Error> {
    let needed: usize = def
        .factors()
        .iter()
        .map(|f| cols(f.level_count(), array.base()))
        .sum();
    if needed > array.cols() {
        return Err(Error::ColumnOverflow {
            array: array.name().to_owned(),
            needed,
            available: array.cols(),
        });
    }

    let maps = assign_columns(def, array.base());
    let mut runs = Vec::with_capacity(array.rows());

    for row in 0..array.rows() {
        let assignments = def
            .factors()
            .iter()
            .zip(&maps)
            .map(|(factor, map)| {
                let idx = decode_level_index(array, row, map, factor.level_count());
                (factor.name().to_owned(), factor.levels()[idx].clone())
            })
            .collect();
        runs.push(Run {
            run_id: row + 1,
            assignments,
        });
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::{generate, generate_with_array};
    use crate::factor::{Definition, Factor};
    use std::collections::HashSet;

    fn def_two_three_level() -> Definition {
        let a = Factor::new("A", ["a1", "a2", "a3"]).unwrap();
        let b = Factor::new("B", ["b1", "b2", "b3"]).unwrap();
        Definition::new(vec![a, b], Some("L9".into())).unwrap()
    }

    #[test]
    fn run_count_matches_array_rows() {
        let def = def_two_three_level();
        let runs = generate(&def).unwrap();
        assert_eq!(runs.len(), 9);
        for (i, run) in runs.iter().enumerate() {
            assert_eq!(run.run_id(), i + 1);
        }
    }

    #[test]
    fn every_level_value_appears_in_every_run() {
        let def = def_two_three_level();
        let runs = generate(&def).unwrap();
        for run in &runs {
            assert!(["a1", "a2", "a3"].contains(&run.value_of("A").unwrap()));
            assert!(["b1", "b2", "b3"].contains(&run.value_of("B").unwrap()));
        }
    }

    #[test]
    fn exact_fit_balance_each_level_appears_equally() {
        let def = def_two_three_level();
        let runs = generate(&def).unwrap();
        let mut counts = std::collections::HashMap::new();
        for run in &runs {
            *counts.entry(run.value_of("A").unwrap().to_owned()).or_insert(0) += 1;
        }
        for count in counts.values() {
            assert_eq!(*count, 3); // 9 runs / 3 levels
        }
    }

    #[test]
    fn determinism() {
        let def = def_two_three_level();
        let first = generate(&def).unwrap();
        let second = generate(&def).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn column_overflow_is_reported() {
        let factors = (0..3)
            .map(|i| Factor::new(format!("f{i}"), (0..9).map(|v| v.to_string())).unwrap())
            .collect();
        let def = Definition::new(factors, Some("L9".into())).unwrap();
        let err = generate(&def).unwrap_err();
        match err {
            crate::Error::ColumnOverflow { array, needed, available } => {
                assert_eq!(array, "L9");
                assert_eq!(needed, 6); // 3 factors * cols(9, 3) = 3 * 2
                assert_eq!(available, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_array_is_reported() {
        let def = def_two_three_level();
        let err = generate_with_array(&def, "L5").unwrap_err();
        assert!(matches!(err, crate::Error::UnknownArray(name) if name == "L5"));
    }

    #[test]
    fn nine_level_factor_in_l81_is_perfectly_balanced() {
        let levels: Vec<String> = (0..9).map(|i| i.to_string()).collect();
        let factor = Factor::new("X", levels).unwrap();
        let def = Definition::new(vec![factor], Some("L81".into())).unwrap();
        let runs = generate(&def).unwrap();
        assert_eq!(runs.len(), 81);

        let mut counts = std::collections::HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();
        for run in &runs {
            let v = run.value_of("X").unwrap().to_owned();
            seen.insert(v.clone());
            *counts.entry(v).or_insert(0) += 1;
        }
        assert_eq!(seen.len(), 9);
        for count in counts.values() {
            assert_eq!(*count, 9); // 81 runs / 9 levels
        }
    }
}
