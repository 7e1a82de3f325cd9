//! Shared test utilities for envcascade integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Lay out a project directory with a defaults file and override files.
//!
//! Invariants / Assumptions:
//! - `ENV` and `RUST_LOG` are never inherited from the host.
//! - Test keys use the `ECT_` prefix so they cannot collide with host variables.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `envcascade` command.
pub fn envcascade_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envcascade");

    cmd.env_remove("ENV").env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("ECT_") {
            cmd.env_remove(&key);
        }
    }

    cmd
}

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `content` to `name` inside the project.
    pub fn write(&self, name: &str, content: &str) -> &Self {
        fs::write(self.dir.path().join(name), content).unwrap();
        self
    }

    /// Create a directory named `name`, so reading it as a file fails.
    pub fn block(&self, name: &str) -> &Self {
        fs::create_dir(self.dir.path().join(name)).unwrap();
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// A command running inside the project, with `defaults.env` as baseline.
    pub fn cmd(&self) -> Command {
        let mut cmd = envcascade_cmd();
        cmd.current_dir(self.dir.path())
            .arg("--defaults")
            .arg(self.dir.path().join("defaults.env"));
        cmd
    }
}
