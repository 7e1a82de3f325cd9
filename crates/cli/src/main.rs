//! envcascade - populate the environment from layered `.env` sources.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run the cascade via the `envcascade-env` library.
//! - Print what was loaded, or start a command with the loaded environment.
//!
//! Does NOT handle:
//! - Parsing or precedence rules (see `crates/env`).
//!
//! Invariants:
//! - Logs go to stderr so `show --output json` stays machine-readable.
//! - The cascade runs before any other thread is started.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}
