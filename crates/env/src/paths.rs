//! Path helpers for override file locations.
//!
//! Responsibilities:
//! - Resolve override file names against an injectable working directory.
//!
//! Does NOT handle:
//! - File I/O (see `file.rs`).
//!
//! Invariants:
//! - Names starting with `/` are returned unchanged and never consult the
//!   working-directory provider.

use std::io;
use std::path::PathBuf;

/// Source of the directory relative file names are resolved against.
pub trait WorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// Delegates to [`std::env::current_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWorkingDir;

impl WorkingDir for SystemWorkingDir {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

impl<F> WorkingDir for F
where
    F: Fn() -> io::Result<PathBuf>,
{
    fn current_dir(&self) -> io::Result<PathBuf> {
        self()
    }
}

/// Always reports the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWorkingDir(pub PathBuf);

impl FixedWorkingDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }
}

impl WorkingDir for FixedWorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Resolve `file` to an absolute path.
///
/// A leading `/` marks the name as already absolute; anything else is joined
/// onto the directory reported by `working_dir`.
pub fn resolve_file_path<W>(file: &str, working_dir: &W) -> io::Result<PathBuf>
where
    W: WorkingDir + ?Sized,
{
    if file.starts_with('/') {
        return Ok(PathBuf::from(file));
    }

    Ok(working_dir.current_dir()?.join(file))
}
