//! `effects` subcommand: print a main-effects table without a
//! recommendation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{csv_loader, helpers, json, parser, GlobalConfiguration, Subcommand};

/// Compute and print main effects from a definition and a results CSV.
#[derive(Parser)]
pub struct Opts {
    /// Path to the `.tgu` definition file.
    file: PathBuf,
    /// Path to a `run_id,response` results CSV.
    results: PathBuf,
    /// Name of the response metric being analyzed, for display only.
    #[arg(long, default_value = "response")]
    metric: String,
}

impl Subcommand for Opts {
    fn run(&self, cfg: &GlobalConfiguration) -> Result<ExitCode> {
        let definition = read_definition(&self.file)?;
        let results_text = std::fs::read_to_string(&self.results)
            .with_context(|| format!("unable to read '{}'", self.results.display()))?;
        let results = csv_loader::load(&definition, &self.metric, &results_text)?;
        let effects = taguchi::calculate_main_effects(&results)?;

        if cfg.json {
            println!("{}", json::effects_to_json(&effects)?);
        } else {
            helpers::effects_table(&effects).printstd();
        }

        Ok(ExitCode::SUCCESS)
    }
}

pub(crate) fn read_definition(file: &PathBuf) -> Result<taguchi::Definition> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("unable to read '{}'", file.display()))?;
    parser::parse(&text).context("failed to parse definition")
}
