//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the selector from `ENV` when `--selector` is not given.
//!
//! Non-responsibilities:
//! - Does not run the cascade (see `commands` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "envcascade")]
#[command(about = "Load layered .env files into the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envcascade show\n  envcascade --defaults .env --selector prod show --output json\n  envcascade --defaults .env exec -- ./server --port 8080\n"
)]
pub struct Cli {
    /// File whose content is used as the embedded baseline
    #[arg(long, global = true, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Selector picking the `.env.<SELECTOR>.local` override (defaults to "dev")
    #[arg(short, long, global = true, env = "ENV", value_name = "NAME")]
    pub selector: Option<String>,

    /// Directory the override files are resolved against (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the cascade and print the variables it set
    Show {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Print keys and sources only, without values
        #[arg(long)]
        keys_only: bool,
    },

    /// Run the cascade, then execute a command with the resulting environment
    Exec {
        /// Command and arguments to run
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
