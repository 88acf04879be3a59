//! Main-effects analyzer: turns a [`crate::ResultSet`] into a per-factor,
//! per-level mean response and range.

use crate::result::ResultSet;
use crate::run::{self, Run};

/// Per-factor main effect: the mean response at each declared level, and
/// the range (max - min) across those means.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MainEffect {
    factor: String,
    /// Mean response for each declared level, in the factor's declared
    /// order. A level with no matching responses contributes `0.0`.
    level_means: Vec<f64>,
    range: f64,
}

impl MainEffect {
    /// The factor this effect was computed for.
    #[must_use]
    pub fn factor(&self) -> &str {
        &self.factor
    }

    /// Mean response per declared level, in declared order.
    #[must_use]
    pub fn level_means(&self) -> &[f64] {
        &self.level_means
    }

    /// `max(level_means) - min(level_means)`, or `0.0` if fewer than two
    /// levels had any observations.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    #[cfg(test)]
    pub(crate) fn for_tests(factor: String, level_means: Vec<f64>) -> Self {
        let range = level_means
            .iter()
            .copied()
            .fold(f64::MIN, f64::max)
            - level_means.iter().copied().fold(f64::MAX, f64::min);
        Self {
            factor,
            level_means,
            range,
        }
    }
}

/// Reconstructs the schedule from `results.definition()` and computes one
/// [`MainEffect`] per factor, in factor order.
///
/// Responses are matched to a factor's level by **string equality of the
/// level value**, not by index, so the analysis is robust to factor
/// reordering between schedule generation and analysis. Samples
/// whose `run_id` falls outside the reconstructed schedule are a
/// `MissingResponse`: skipped silently, not an error.
///
/// # Errors
///
/// Returns an error if the schedule cannot be regenerated from
/// `results.definition()` (unknown array, column overflow, or no array
/// fits) — see [`crate::run::generate`].
pub fn calculate_main_effects(results: &ResultSet<'_>) -> crate::Result<Vec<MainEffect>> {
    let runs = run::generate(results.definition())?;

    let effects = results
        .definition()
        .factors()
        .iter()
        .map(|factor| {
            let mut sums = vec![0.0_f64; factor.level_count()];
            let mut counts = vec![0usize; factor.level_count()];

            for sample in results.samples() {
                let Some(run) = run_for(&runs, sample.run_id) else {
                    continue; // MissingResponse: out-of-range run_id, skip silently.
                };
                let Some(value) = run.value_of(factor.name()) else {
                    continue;
                };
                let Some(level_idx) = factor.levels().iter().position(|l| l == value) else {
                    continue;
                };
                sums[level_idx] += sample.response;
                counts[level_idx] += 1;
            }

            let level_means: Vec<f64> = sums
                .iter()
                .zip(&counts)
                .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
                .collect();

            let observed_levels = counts.iter().filter(|&&c| c > 0).count();
            let range = if observed_levels < 2 {
                0.0
            } else {
                let max = level_means.iter().copied().fold(f64::MIN, f64::max);
                let min = level_means.iter().copied().fold(f64::MAX, f64::min);
                max - min
            };

            MainEffect {
                factor: factor.name().to_owned(),
                level_means,
                range,
            }
        })
        .collect();

    Ok(effects)
}

fn run_for(runs: &[Run], run_id: usize) -> Option<&Run> {
    run_id
        .checked_sub(1)
        .and_then(|idx| runs.get(idx))
        .filter(|run| run.run_id() == run_id)
}
