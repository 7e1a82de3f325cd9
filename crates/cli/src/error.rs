//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map errors in an `anyhow` chain to the appropriate exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - The exit status of a command run by `exec`, which is passed through as-is.

use envcascade_env::CascadeError;
use thiserror::Error;

/// Structured exit codes for envcascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - bad arguments, unreadable defaults file, output failure.
    GeneralError = 1,

    /// Cascade failure - an override file could not be resolved or read, or a
    /// variable could not be set.
    CascadeFailed = 2,

    /// The command given to `exec` could not be started.
    SpawnFailed = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// The `exec` target could not be started.
#[derive(Error, Debug)]
#[error("failed to start {program}")]
pub struct SpawnError {
    pub program: String,
    #[source]
    pub source: std::io::Error,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<CascadeError>().is_some() {
                return ExitCode::CascadeFailed;
            }
            if cause.downcast_ref::<SpawnError>().is_some() {
                return ExitCode::SpawnFailed;
            }
        }

        ExitCode::GeneralError
    }
}
