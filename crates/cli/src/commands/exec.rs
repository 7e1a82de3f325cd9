//! Exec command: run the cascade, then hand the environment to a child process.
//!
//! Responsibilities:
//! - Run the cascade into this process's environment.
//! - Start the requested command, which inherits that environment.
//! - Report the child's exit status so `main` can pass it through.
//!
//! Does NOT handle:
//! - Signal forwarding. The child shares the terminal's process group.

use anyhow::{Result, bail};
use std::process::Command;
use tracing::{debug, info};

use super::{CascadeOptions, run_cascade};
use crate::error::SpawnError;

/// Run `command` after the cascade and return its exit code.
///
/// A child terminated by a signal has no exit code and is reported as 1.
pub fn run(options: &CascadeOptions, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        bail!("No command given to exec");
    };

    let report = run_cascade(options)?;
    info!(
        selector = %report.selector,
        applied = report.applied_count(),
        program = %program,
        "Starting command"
    );

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| SpawnError {
            program: program.clone(),
            source,
        })?;
    debug!(status = %status, "Command exited");

    Ok(status.code().unwrap_or(1))
}
