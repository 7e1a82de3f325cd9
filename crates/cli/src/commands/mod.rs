//! CLI command implementations.

pub mod exec;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use envcascade_env::{Cascade, CascadeReport, Loader, ProcessEnv};

use crate::args::Cli;

/// Cascade inputs taken from the global CLI options.
#[derive(Debug, Clone, Default)]
pub struct CascadeOptions {
    pub defaults: Option<PathBuf>,
    pub selector: Option<String>,
    pub dir: Option<PathBuf>,
}

impl From<&Cli> for CascadeOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            defaults: cli.defaults.clone(),
            selector: cli.selector.clone(),
            dir: cli.dir.clone(),
        }
    }
}

/// Run the cascade into the process environment.
pub fn run_cascade(options: &CascadeOptions) -> Result<CascadeReport> {
    let baseline = match &options.defaults {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read defaults file {}", path.display()))?,
        None => String::new(),
    };

    let dir = options.dir.clone();
    let loader = Loader::new().with_working_dir(move || match &dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir(),
    });

    let mut cascade = Cascade::new(&baseline).with_loader(loader);
    if let Some(selector) = &options.selector {
        cascade = cascade.with_selector(selector.clone());
    }

    cascade
        .run(&mut ProcessEnv)
        .context("Failed to load environment")
}
