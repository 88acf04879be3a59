#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)]

//! Command-line driver for the `taguchi` crate: parses `.tgu` experiment
//! definitions, generates run schedules, drives external processes, and
//! analyzes collected results.

mod analyze;
mod csv_loader;
mod effects;
mod generate;
mod helpers;
mod json;
mod list_arrays;
mod parser;
mod run;
mod runner;
mod validate;

use anyhow::Result;
use clap::Parser;
use enum_dispatch::enum_dispatch;
use std::process::ExitCode;

/// Flags shared by every subcommand.
#[derive(Parser)]
pub struct GlobalConfiguration {
    /// Emit machine-readable JSON instead of a formatted table.
    #[arg(long, global = true)]
    pub json: bool,
    /// Raise the log level; repeat for more detail (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[enum_dispatch]
pub trait Subcommand {
    fn run(&self, cfg: &GlobalConfiguration) -> Result<ExitCode>;
}

#[enum_dispatch(Subcommand)]
#[derive(Parser)]
pub enum SubcommandEnum {
    /// Print the run schedule for a definition.
    Generate(generate::Opts),
    /// Fork/exec a command once per run, with the run's factor levels in
    /// the environment.
    Run(run::Opts),
    /// Compute main effects and print a recommendation.
    Analyze(analyze::Opts),
    /// Compute main effects without a recommendation.
    Effects(effects::Opts),
    /// Parse and validate a definition without generating runs.
    Validate(validate::Opts),
    /// List the orthogonal-array catalog.
    ListArrays(list_arrays::Opts),
}

#[derive(Parser)]
#[command(
    arg_required_else_help = true,
    author,
    about,
    disable_help_subcommand = true,
    name = "taguchi",
    version
)]
pub struct Opts {
    #[command(flatten)]
    pub configuration: GlobalConfiguration,
    #[command(subcommand)]
    pub subcommand: SubcommandEnum,
}

#[cfg(test)]
mod tests {
    use super::Opts;

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }
}
