//! Centralized constants for the environment cascade.
//!
//! File names and the selector variable live here so the library and the
//! CLI agree on them.

/// Environment variable that selects the cascade's selector-local file.
pub const SELECTOR_VAR: &str = "ENV";

/// Selector used when [`SELECTOR_VAR`] is unset or empty.
pub const DEFAULT_SELECTOR: &str = "dev";

/// Lowest-priority override file, resolved against the working directory.
pub const GENERIC_LOCAL_FILE: &str = ".env.local";

/// Returns the selector-specific override file name, e.g. `.env.prod.local`.
pub fn selector_local_file(selector: &str) -> String {
    format!(".env.{selector}.local")
}
