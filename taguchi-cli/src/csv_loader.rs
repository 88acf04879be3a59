//! CSV result loader: reads `run_id,response` rows into a
//! [`taguchi::ResultSet`].
//!
//! Built on the `csv` crate, the stack's choice for tabular ingestion
//! (mirrored from the sibling `CokieMiner-Anafis-Tauri` example, which
//! pulls in `csv` for the same kind of external-data ingestion).

use anyhow::{bail, Context, Result};
use taguchi::{Definition, ResultSet};

/// Loads `run_id,response` samples from `text` into a fresh [`ResultSet`]
/// for `metric`, borrowing `definition`.
///
/// An optional header row, `#`-prefixed comment lines, and blank lines are
/// all tolerated. A malformed `run_id` or `response` aborts the load
/// with a descriptive error; out-of-schedule `run_id`s are *not* rejected
/// here (the analyzer's `MissingResponse` policy handles those).
///
/// # Errors
///
/// Returns an error if any non-blank, non-comment row fails to parse as
/// `run_id,response`.
pub fn load<'def>(
    definition: &'def Definition,
    metric: &str,
    text: &str,
) -> Result<ResultSet<'def>> {
    let mut results = ResultSet::new(definition, metric);

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(line.as_bytes())
            .into_records();
        let Some(record) = fields.next() else {
            continue;
        };
        let record = record.with_context(|| format!("line {line_no}: malformed CSV row"))?;
        if record.len() != 2 {
            bail!("line {line_no}: expected 'run_id,response', got '{line}'");
        }

        let run_id_field = &record[0];
        let Ok(run_id) = run_id_field.parse::<usize>() else {
            if idx == 0 && run_id_field.eq_ignore_ascii_case("run_id") {
                continue; // optional header row
            }
            bail!("line {line_no}: '{run_id_field}' is not a positive integer run_id");
        };
        if run_id == 0 {
            bail!("line {line_no}: run_id must be positive, got 0");
        }

        let response: f64 = record[1]
            .parse()
            .with_context(|| format!("line {line_no}: '{}' is not a valid response", &record[1]))?;
        if !response.is_finite() {
            bail!(
                "line {line_no}: '{}' is not a finite response",
                &record[1]
            );
        }

        results.push(run_id, response);
    }

    Ok(results)
}
