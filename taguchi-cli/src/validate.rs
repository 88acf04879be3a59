//! `validate` subcommand: parse and validate a definition without
//! generating runs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{parser, GlobalConfiguration, Subcommand};

/// Parse and validate a `.tgu` definition, reporting the result without
/// generating a run schedule.
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

        if cfg.json {
            println!(
                "{{\"valid\":true,\"factors\":{},\"array\":{}}}",
                definition.factors().len(),
                definition
                    .array_name()
                    .map_or_else(|| "null".to_owned(), |n| format!("\"{n}\""))
            );
        } else {
            println!(
                "ok: {} factor(s){}",
                definition.factors().len(),
                definition
                    .array_name()
                    .map_or_else(String::new, |n| format!(", array {n}"))
            );
        }

        Ok(ExitCode::SUCCESS)
    }
}
