//! Result store: an append-only collection of `(run_id,
//! response)` samples, borrowed against the definition that produced the
//! schedule they're responses for.

use crate::factor::Definition;

/// One observed response for a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// 1-based run identifier the response was recorded against.
    pub run_id: usize,
    /// The measured response value.
    pub response: f64,
}

/// Append-only samples for one metric, borrowing the [`Definition`] the
/// schedule was generated from.
///
/// A `ResultSet` must not outlive the `Definition` it borrows — enforced
/// here by the `'def` lifetime rather than at runtime.
#[derive(Debug)]
pub struct ResultSet<'def> {
    definition: &'def Definition,
    metric: String,
    samples: Vec<Sample>,
}

impl<'def> ResultSet<'def> {
    /// Creates an empty result set for `metric`, borrowing `definition`.
    #[must_use]
    pub fn new(definition: &'def Definition, metric: impl Into<String>) -> Self {
        Self {
            definition,
            metric: metric.into(),
            samples: Vec::new(),
        }
    }

    /// Appends one `(run_id, response)` sample. Duplicate `run_id`s are
    /// permitted and are treated as repeated measurements, averaged by the
    /// analyzer.
    pub fn push(&mut self, run_id: usize, response: f64) {
        self.samples.push(Sample { run_id, response });
    }

    /// The definition this result set was created against.
    #[must_use]
    pub fn definition(&self) -> &'def Definition {
        self.definition
    }

    /// The metric name passed to [`ResultSet::new`].
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// All recorded samples, in insertion order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The first recorded response for `run_id`, used only for diagnostics
    /// — not by the analyzer, which aggregates every matching sample
    /// instead.
    #[must_use]
    pub fn lookup(&self, run_id: usize) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.run_id == run_id)
            .map(|s| s.response)
    }
}

#[cfg(test)]
mod tests {
    use super::ResultSet;
    use crate::factor::{Definition, Factor};

    #[test]
    fn duplicate_run_ids_are_all_retained() {
        let a = Factor::new("A", ["1", "2"]).unwrap();
        let def = Definition::new(vec![a], None).unwrap();
        let mut results = ResultSet::new(&def, "yield");
        results.push(1, 10.0);
        results.push(1, 20.0);
        assert_eq!(results.samples().len(), 2);
        assert_eq!(results.lookup(1), Some(10.0));
    }

    #[test]
    fn lookup_of_unknown_run_is_none() {
        let a = Factor::new("A", ["1", "2"]).unwrap();
        let def = Definition::new(vec![a], None).unwrap();
        let results = ResultSet::new(&def, "yield");
        assert_eq!(results.lookup(1), None);
    }
}
