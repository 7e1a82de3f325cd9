//! Error types for the environment cascade.
//!
//! Responsibilities:
//! - Define failures for writing a variable, applying content, loading an
//!   optional file and running the cascade.
//! - Chain lower-level causes through `#[source]` so callers can see which
//!   step failed and why.
//!
//! Invariants:
//! - Messages may name keys, files and line numbers but NEVER include values
//!   read from a source, since those may be secrets.
//! - A missing optional file is not an error and has no variant here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The variable table refused a key/value pair.
#[derive(Error, Debug)]
pub enum SetVarError {
    #[error("variable name must not be empty")]
    EmptyKey,

    #[error("invalid variable name {key:?}: must not contain '=' or NUL")]
    InvalidKey { key: String },

    #[error("invalid value for {key}: must not contain NUL")]
    InvalidValue { key: String },

    #[error("refused to set {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// Applying a block of content stopped at the first rejected assignment.
///
/// Assignments on earlier lines stay applied.
#[derive(Error, Debug)]
#[error("failed to set {key} (line {line})")]
pub struct ApplyError {
    pub key: String,
    pub line: usize,
    #[source]
    pub source: SetVarError,
}

/// Loading an optional override file failed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to resolve path of {file}")]
    ResolvePath {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to apply {}", path.display())]
    Apply {
        path: PathBuf,
        #[source]
        source: ApplyError,
    },
}

/// A cascade step failed; the remaining steps were not run.
#[derive(Error, Debug)]
pub enum CascadeError {
    #[error("failed to apply embedded defaults")]
    Baseline(#[source] ApplyError),

    #[error("failed to load selector override {file}")]
    SelectorLocal {
        file: String,
        #[source]
        source: LoadError,
    },

    #[error("failed to load local override {file}")]
    GenericLocal {
        file: String,
        #[source]
        source: LoadError,
    },
}

impl CascadeError {
    /// The apply failure at the root of this error, if a write was refused.
    pub fn apply_error(&self) -> Option<&ApplyError> {
        match self {
            CascadeError::Baseline(e) => Some(e),
            CascadeError::SelectorLocal { source, .. }
            | CascadeError::GenericLocal { source, .. } => match source {
                LoadError::Apply { source, .. } => Some(source),
                _ => None,
            },
        }
    }
}
