//! Layered `.env` loading for process startup.
//!
//! This crate populates a variable table, normally the process environment,
//! from three sources in priority order: an embedded baseline, a
//! selector-specific `.env.<ENV>.local` file and a generic `.env.local` file.
//! Variables that are already set always win over every source.
//!
//! ```no_run
//! let report = envcascade_env::auto_load("PORT=8080\nLOG_LEVEL=info\n")?;
//! println!("loaded {} variables for {}", report.applied_count(), report.selector);
//! # Ok::<(), envcascade_env::CascadeError>(())
//! ```

mod cascade;
pub mod constants;
mod error;
mod file;
mod loader;
pub mod parser;
mod paths;
mod table;

pub use cascade::{Cascade, CascadeReport, Source, SourceReport, auto_load, resolve_selector};
pub use error::{ApplyError, CascadeError, LoadError, SetVarError};
#[cfg(any(test, feature = "test-support"))]
pub use file::MemFiles;
pub use file::{ReadContent, SystemFiles, read_optional_file};
pub use loader::{ApplyReport, Loader};
pub use parser::{Assignment, parse_line};
pub use paths::{FixedWorkingDir, SystemWorkingDir, WorkingDir, resolve_file_path};
#[cfg(any(test, feature = "test-support"))]
pub use table::MemoryEnv;
pub use table::{EnvTable, ProcessEnv};
