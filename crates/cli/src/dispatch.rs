//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Turn global options into cascade inputs.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Mapping errors to exit codes (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands::{self, CascadeOptions};
use crate::error::ExitCode;

/// Run the selected command and return the process exit code.
///
/// `exec` returns the child's exit code; every other command returns
/// [`ExitCode::Success`] when it completes.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    let options = CascadeOptions::from(&cli);

    match cli.command {
        Commands::Show { output, keys_only } => {
            commands::show::run(&options, &output, keys_only)?;
            Ok(ExitCode::Success.as_i32())
        }
        Commands::Exec { command } => commands::exec::run(&options, &command),
    }
}
