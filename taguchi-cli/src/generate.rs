//! `generate` subcommand: print the run schedule for a definition.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{helpers, json, parser, GlobalConfiguration, Subcommand};

/// Print the run schedule for a `.tgu` experiment definition.
#[derive(Parser)]
pub struct Opts {
    /// Path to the `.tgu` definition file.
    file: PathBuf,
}

impl Subcommand for Opts {
    fn run(&self, cfg: &GlobalConfiguration) -> Result<ExitCode> {
        let text = std::fs::read_to_string(&self.file)
            .with_context(|| format!("unable to read '{}'", self.file.display()))?;
        let definition = parser::parse(&text).context("failed to parse definition")?;
        let runs = taguchi::run::generate(&definition)?;

        if cfg.json {
            println!("{}", json::runs_to_json(&runs)?);
        } else {
            helpers::runs_table(&runs).printstd();
        }

        Ok(ExitCode::SUCCESS)
    }
}
