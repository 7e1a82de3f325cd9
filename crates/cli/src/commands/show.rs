//! Show command: run the cascade and report what it set.
//!
//! Responsibilities:
//! - Run the cascade into the process environment.
//! - List every variable the cascade set, with the source that set it.
//! - List keys that were already present and therefore kept.
//!
//! Does NOT handle:
//! - Rendering (see `formatters` module).

use anyhow::Result;
use envcascade_env::{CascadeReport, EnvTable, ProcessEnv, Source};
use serde::Serialize;
use tracing::info;

use super::{CascadeOptions, run_cascade};
use crate::formatters::{OutputFormat, get_formatter};

/// A variable set by the cascade.
#[derive(Debug, Clone, Serialize)]
pub struct VariableRow {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub source: Source,
}

/// Result of `show`.
#[derive(Debug, Clone, Serialize)]
pub struct ShowOutput {
    pub selector: String,
    pub variables: Vec<VariableRow>,
    pub preexisting: Vec<String>,
}

impl ShowOutput {
    /// Build rows in the order the cascade applied them, reading values back from `table`.
    pub fn from_report<T>(report: &CascadeReport, table: &T, keys_only: bool) -> Self
    where
        T: EnvTable + ?Sized,
    {
        let variables = report
            .steps
            .iter()
            .flat_map(|step| step.report.applied.iter().map(move |key| (key, step.source)))
            .map(|(key, source)| VariableRow {
                key: key.clone(),
                value: if keys_only { None } else { table.get(key) },
                source,
            })
            .collect();

        Self {
            selector: report.selector.clone(),
            variables,
            preexisting: report.preexisting().into_iter().collect(),
        }
    }
}

pub fn run(options: &CascadeOptions, output: &str, keys_only: bool) -> Result<()> {
    let format: OutputFormat = output.parse()?;

    let report = run_cascade(options)?;
    info!(
        selector = %report.selector,
        applied = report.applied_count(),
        "Cascade finished"
    );

    let show = ShowOutput::from_report(&report, &ProcessEnv, keys_only);
    let formatter = get_formatter(format);
    print!("{}", formatter.format_show(&show)?);

    Ok(())
}
