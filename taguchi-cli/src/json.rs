//! JSON export: serializes runs and main effects to the shapes
//! consumed by downstream tooling.
//!
//! Uses `serde`/`serde_json` directly rather than deriving `Serialize` on
//! the core `taguchi` types themselves for the run/effect *views* shown
//! here, since the wire shape (ordered `factor -> value` pairs as object
//! fields) doesn't match either type's natural field layout.

use serde::Serialize;
use taguchi::{MainEffect, Run};

#[derive(Serialize)]
struct RunView {
    run_id: usize,
    #[serde(flatten)]
    assignments: indexmap_shim::OrderedMap,
}

/// Serializes `runs` to a JSON array of `{"run_id": N, "<factor>": "<value>", ...}`
/// objects, preserving each run's factor insertion order.
///
/// # Errors
///
/// Returns an error only if `serde_json` itself fails to serialize, which
/// does not happen for the plain string/integer data produced here.
pub fn runs_to_json(runs: &[Run]) -> anyhow::Result<String> {
    let views: Vec<RunView> = runs
        .iter()
        .map(|run| RunView {
            run_id: run.run_id(),
            assignments: indexmap_shim::OrderedMap(run.assignments().to_vec()),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

#[derive(Serialize)]
struct EffectView<'a> {
    factor: &'a str,
    range: f64,
    level_means: &'a [f64],
}

/// Serializes `effects` to a JSON array of
/// `{"factor": "..", "range": .., "level_means": [..]}` objects.
///
/// # Errors
///
/// Returns an error only if `serde_json` itself fails to serialize.
pub fn effects_to_json(effects: &[MainEffect]) -> anyhow::Result<String> {
    let views: Vec<EffectView<'_>> = effects
        .iter()
        .map(|e| EffectView {
            factor: e.factor(),
            range: e.range(),
            level_means: e.level_means(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

/// A minimal order-preserving "flattened map" serializer for `(String,
/// String)` pairs, since `serde_json`'s `#[serde(flatten)]` requires a
/// `Serialize` map-like value and a plain `Vec` of pairs does not implement
/// `serde::Serialize` as a map.
mod indexmap_shim {
    use serde::ser::SerializeMap;
    use serde::{Serialize, Serializer};

    pub struct OrderedMap(pub Vec<(String, String)>);

    impl Serialize for OrderedMap {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;
            for (k, v) in &self.0 {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }
}
