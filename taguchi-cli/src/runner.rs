//! External process driver: forks/execs a shell command
//! once per run, with the run's factor levels exposed in the environment.

use std::process::Command;

use anyhow::{Context, Result};
use taguchi::Run;

/// The outcome of running `command` once for a single [`Run`].
pub struct RunOutcome {
    /// The run this outcome belongs to.
    pub run_id: usize,
    /// The child's exit code, or `None` if it was terminated by a signal.
    pub exit_code: Option<i32>,
}

/// Runs `command` through `sh -c` once per entry in `runs`, setting
/// `TAGUCHI_RUN_ID` and `TAGUCHI_<factor_name>` in the child's environment
///. Runs execute sequentially, in schedule order; a child that fails
/// to spawn at all is an error, but a nonzero exit code is simply recorded.
///
/// # Errors
///
/// Returns an error if any child process fails to spawn (for example, `sh`
/// is not on `PATH`).
pub fn run_all(runs: &[Run], command: &str) -> Result<Vec<RunOutcome>> {
    runs.iter().map(|run| run_one(run, command)).collect()
}

fn run_one(run: &Run, command: &str) -> Result<RunOutcome> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd.env("TAGUCHI_RUN_ID", run.run_id().to_string());
    for (name, value) in run.assignments() {
        cmd.env(format!("TAGUCHI_{name}"), value);
    }

    let status = cmd
        .status()
        .with_context(|| format!("run {}: failed to spawn '{command}'", run.run_id()))?;

    Ok(RunOutcome {
        run_id: run.run_id(),
        exit_code: status.code(),
    })
}
