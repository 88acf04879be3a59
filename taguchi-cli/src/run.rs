//! `run` subcommand: fork/exec a command once per run.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{parser, runner, GlobalConfiguration, Subcommand};

/// Execute a shell command once per run, with that run's factor levels in
/// the environment.
#[derive(Parser)]
pub struct Opts {
    /// Path to the `.tgu` definition file.
    file: PathBuf,
    /// Shell command to execute for each run.
    command: String,
}

impl Subcommand for Opts {
    fn run(&self, cfg: &GlobalConfiguration) -> Result<ExitCode> {
        let text = std::fs::read_to_string(&self.file)
            .with_context(|| format!("unable to read '{}'", self.file.display()))?;
        let definition = parser::parse(&text).context("failed to parse definition")?;
        let runs = taguchi::run::generate(&definition)?;

        let outcomes = runner::run_all(&runs, &self.command)?;

        let mut any_failed = false;
        for outcome in &outcomes {
            let code_display = outcome
                .exit_code
                .map_or_else(|| "signalled".to_owned(), |c| c.to_string());
            if outcome.exit_code != Some(0) {
                any_failed = true;
            }
            if cfg.json {
                println!(
                    "{{\"run_id\":{},\"exit_code\":{}}}",
                    outcome.run_id,
                    outcome
                        .exit_code
                        .map_or_else(|| "null".to_owned(), |c| c.to_string())
                );
            } else {
                println!("run {}: {}", outcome.run_id, code_display);
            }
        }

        Ok(if any_failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}
