//! Destination variable tables.
//!
//! Responsibilities:
//! - Abstract the table the cascade writes into behind [`EnvTable`].
//! - Provide [`ProcessEnv`] over the real process environment.
//! - Provide [`MemoryEnv`] for tests (`cfg(test)` or `test-support`).
//!
//! Invariants / Assumptions:
//! - The cascade only ever adds absent keys; nothing here removes variables.
//! - [`ProcessEnv`] rejects pairs `std::env::set_var` would panic on.
//! - Writers to the process environment are serialized by the caller.

use std::ffi::OsString;

use crate::error::SetVarError;

/// A key/value table the cascade reads from and writes into.
///
/// Does **not** require `Send + Sync`; the cascade is single-threaded.
pub trait EnvTable {
    /// Current UTF-8 value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `key` is present at all.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SetVarError>;
}

impl<T: EnvTable + ?Sized> EnvTable for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SetVarError> {
        (**self).set(key, value)
    }
}

/// The process environment.
///
/// Zero-sized; every call goes straight to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    fn var_os(key: &str) -> Option<OsString> {
        if validate_key(key).is_err() {
            return None;
        }
        std::env::var_os(key)
    }
}

impl EnvTable for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        Self::var_os(key).and_then(|value| value.into_string().ok())
    }

    /// Non-UTF-8 values count as present.
    fn contains(&self, key: &str) -> bool {
        Self::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SetVarError> {
        validate_key(key)?;
        if value.contains('\0') {
            return Err(SetVarError::InvalidValue {
                key: key.to_string(),
            });
        }

        // SAFETY: the cascade runs once during startup, before other threads
        // read or write the environment. Callers running it later must ensure
        // no concurrent access.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<(), SetVarError> {
    if key.is_empty() {
        return Err(SetVarError::EmptyKey);
    }
    if key.contains(['=', '\0']) {
        return Err(SetVarError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryEnv;

#[cfg(any(test, feature = "test-support"))]
mod memory {
    use std::collections::{BTreeMap, BTreeSet};

    use super::EnvTable;
    use crate::error::SetVarError;

    /// `BTreeMap`-backed table that records every write.
    ///
    /// Keys registered with [`MemoryEnv::reject`] fail with
    /// [`SetVarError::Rejected`] and are not recorded as written.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryEnv {
        vars: BTreeMap<String, String>,
        rejected: BTreeSet<String>,
        writes: Vec<String>,
    }

    impl MemoryEnv {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.vars.insert(key.into(), value.into());
            self
        }

        pub fn reject(mut self, key: impl Into<String>) -> Self {
            self.rejected.insert(key.into());
            self
        }

        pub fn vars(&self) -> &BTreeMap<String, String> {
            &self.vars
        }

        /// Keys passed to a successful `set`, in call order.
        pub fn writes(&self) -> &[String] {
            &self.writes
        }
    }

    impl EnvTable for MemoryEnv {
        fn get(&self, key: &str) -> Option<String> {
            self.vars.get(key).cloned()
        }

        fn contains(&self, key: &str) -> bool {
            self.vars.contains_key(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), SetVarError> {
            if self.rejected.contains(key) {
                return Err(SetVarError::Rejected {
                    key: key.to_string(),
                    reason: "forced-error".to_string(),
                });
            }
            self.vars.insert(key.to_string(), value.to_string());
            self.writes.push(key.to_string());
            Ok(())
        }
    }
}
