//! `analyze` subcommand: print a main-effects table and an optimal-
//! level recommendation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{csv_loader, effects, helpers, GlobalConfiguration, Subcommand};

/// Compute main effects from a definition and a results CSV, then recommend
/// the optimal level of each factor.
#[derive(Parser)]
pub struct Opts {
    /// Path to the `.tgu` definition file.
    file: PathBuf,
    /// Path to a `run_id,response` results CSV.
    results: PathBuf,
    /// Name of the response metric being analyzed, for display only.
    #[arg(long, default_value = "response")]
    metric: String,
    /// Recommend the level that minimizes the response instead of
    /// maximizing it.
    #[arg(long)]
    minimize: bool,
}

impl Subcommand for Opts {
    fn run(&self, cfg: &GlobalConfiguration) -> Result<ExitCode> {
        let definition = effects::read_definition(&self.file)?;
        let results_text = std::fs::read_to_string(&self.results)
            .with_context(|| format!("unable to read '{}'", self.results.display()))?;
        let results = csv_loader::load(&definition, &self.metric, &results_text)?;
        let main_effects = taguchi::calculate_main_effects(&results)?;
        let higher_is_better = !self.minimize;
        let recommendation = taguchi::recommend(&main_effects, higher_is_better);

        if cfg.json {
            let effects_json: serde_json::Value = serde_json::from_str(&crate::json::effects_to_json(&main_effects)?)?;
            let report = serde_json::json!({
                "metric": self.metric,
                "higher_is_better": higher_is_better,
                "effects": effects_json,
                "recommendation": recommendation,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            helpers::effects_table(&main_effects).printstd();
            println!();
            println!("recommendation ({}): {}", &self.metric, recommendation);
        }

        Ok(ExitCode::SUCCESS)
    }
}
