//! Apply engine for `.env`-style content.
//!
//! Responsibilities:
//! - Parse content line by line and write assignments into an [`EnvTable`].
//! - Load optional override files through injectable path and file providers.
//!
//! Does NOT handle:
//! - Ordering of sources (see `cascade.rs`).
//! - The line grammar itself (see `parser.rs`).
//!
//! Invariants:
//! - A key already present in the table is never written again; the table is
//!   not even asked to set it.
//! - The first refused write aborts the apply; earlier writes are kept.
//! - A file that fails to resolve or read never reaches the table.

use serde::Serialize;

use crate::error::{ApplyError, LoadError};
use crate::file::{ReadContent, SystemFiles};
use crate::parser::assignments;
use crate::paths::{SystemWorkingDir, WorkingDir, resolve_file_path};
use crate::table::EnvTable;

/// Keys touched by one apply, in line order. Values are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Keys written into the table.
    pub applied: Vec<String>,
    /// Keys left alone because the table already had them.
    pub skipped: Vec<String>,
}

impl ApplyReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.skipped.is_empty()
    }
}

/// Applies content to a variable table.
///
/// The working-directory and file providers default to the real process
/// working directory and filesystem; tests swap them with
/// [`Loader::with_working_dir`] and [`Loader::with_reader`].
#[derive(Debug, Clone, Default)]
pub struct Loader<W = SystemWorkingDir, R = SystemFiles> {
    working_dir: W,
    reader: R,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WorkingDir, R: ReadContent> Loader<W, R> {
    pub fn with_parts(working_dir: W, reader: R) -> Self {
        Self {
            working_dir,
            reader,
        }
    }

    pub fn with_working_dir<W2: WorkingDir>(self, working_dir: W2) -> Loader<W2, R> {
        Loader {
            working_dir,
            reader: self.reader,
        }
    }

    pub fn with_reader<R2: ReadContent>(self, reader: R2) -> Loader<W, R2> {
        Loader {
            working_dir: self.working_dir,
            reader,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Write every assignment in `content` whose key is not yet in `table`.
    pub fn apply<T>(&self, table: &mut T, content: &str) -> Result<ApplyReport, ApplyError>
    where
        T: EnvTable + ?Sized,
    {
        let mut report = ApplyReport::default();

        for (line, assignment) in assignments(content) {
            let key = assignment.key;

            if table.contains(key) {
                tracing::debug!(key, line, "Variable already set, skipping");
                report.skipped.push(key.to_string());
                continue;
            }

            table
                .set(key, assignment.value)
                .map_err(|source| ApplyError {
                    key: key.to_string(),
                    line,
                    source,
                })?;
            tracing::debug!(key, line, "Variable set");
            report.applied.push(key.to_string());
        }

        Ok(report)
    }

    /// Apply the content of `file` if it exists.
    ///
    /// Relative names are resolved against the working directory. A missing
    /// file is an empty no-op.
    pub fn load_optional<T>(&self, table: &mut T, file: &str) -> Result<ApplyReport, LoadError>
    where
        T: EnvTable + ?Sized,
    {
        let path = resolve_file_path(file, &self.working_dir).map_err(|source| {
            LoadError::ResolvePath {
                file: file.to_string(),
                source,
            }
        })?;

        let content = self
            .reader
            .read_optional(&path)
            .map_err(|source| LoadError::ReadFile {
                path: path.clone(),
                source,
            })?;

        self.apply(table, &content)
            .map_err(|source| LoadError::Apply { path, source })
    }
}
