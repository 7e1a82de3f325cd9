//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render cascade results as a tab-separated table or pretty JSON.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - JSON output is always a single valid document, even when nothing was set.

use anyhow::Result;
use std::fmt::Write;

use crate::commands::show::ShowOutput;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the result of `show`.
    fn format_show(&self, output: &ShowOutput) -> Result<String>;
}

/// Returns the formatter for `format`.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_show(&self, output: &ShowOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_show(&self, output: &ShowOutput) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Selector: {}\n", output.selector)?;

        if output.variables.is_empty() {
            writeln!(out, "No variables set.")?;
        } else {
            let with_values = output.variables.iter().any(|row| row.value.is_some());
            if with_values {
                writeln!(out, "KEY\tSOURCE\tVALUE")?;
            } else {
                writeln!(out, "KEY\tSOURCE")?;
            }
            for row in &output.variables {
                match &row.value {
                    Some(value) => writeln!(out, "{}\t{}\t{}", row.key, row.source, value)?,
                    None => writeln!(out, "{}\t{}", row.key, row.source)?,
                }
            }
        }

        if !output.preexisting.is_empty() {
            writeln!(out, "\nAlready set (kept): {}", output.preexisting.join(", "))?;
        }

        Ok(out)
    }
}
