//! Optional file reading.
//!
//! Responsibilities:
//! - Read an override file's full text content.
//! - Treat a missing file as empty content.
//!
//! Does NOT handle:
//! - Path resolution (see `paths.rs`).
//!
//! Invariants:
//! - `ErrorKind::NotFound` maps to `Ok(String::new())`; every other I/O error
//!   (permission denied, directory, invalid UTF-8) is returned as-is.

use std::io;
use std::path::Path;

/// Provider of file contents for optional override files.
pub trait ReadContent {
    /// Returns the content at `path`, or an empty string if it does not exist.
    fn read_optional(&self, path: &Path) -> io::Result<String>;
}

/// Delegates to [`read_optional_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFiles;

impl ReadContent for SystemFiles {
    #[inline]
    fn read_optional(&self, path: &Path) -> io::Result<String> {
        read_optional_file(path)
    }
}

/// Read the file at `path`, returning an empty string if it does not exist.
pub fn read_optional_file(path: &Path) -> io::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Optional env file not found");
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use mem::MemFiles;

#[cfg(any(test, feature = "test-support"))]
mod mem {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    use super::ReadContent;

    /// In-memory file contents keyed by exact path.
    ///
    /// Paths are not normalized: `"/a/.env"` and `"/a/./.env"` are distinct.
    /// Paths registered with [`MemFiles::fail`] return an error of the given
    /// kind instead of content.
    #[derive(Debug, Default)]
    pub struct MemFiles {
        files: HashMap<PathBuf, String>,
        failures: HashMap<PathBuf, io::ErrorKind>,
        reads: RefCell<Vec<PathBuf>>,
    }

    impl MemFiles {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(
            &mut self,
            path: impl Into<PathBuf>,
            content: impl Into<String>,
        ) -> &mut Self {
            self.files.insert(path.into(), content.into());
            self
        }

        pub fn fail(&mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> &mut Self {
            self.failures.insert(path.into(), kind);
            self
        }

        /// Paths requested so far, in order.
        pub fn reads(&self) -> Vec<PathBuf> {
            self.reads.borrow().clone()
        }
    }

    impl ReadContent for MemFiles {
        fn read_optional(&self, path: &Path) -> io::Result<String> {
            self.reads.borrow_mut().push(path.to_path_buf());

            if let Some(kind) = self.failures.get(path) {
                return Err(io::Error::new(*kind, "forced-error"));
            }

            Ok(self.files.get(path).cloned().unwrap_or_default())
        }
    }
}
