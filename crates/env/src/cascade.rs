//! Cascade orchestration.
//!
//! Responsibilities:
//! - Run the three sources through a [`Loader`] in fixed priority order:
//!   embedded baseline, `.env.<selector>.local`, `.env.local`.
//! - Resolve the selector from the `ENV` variable, defaulting to `dev`.
//! - Report which source wrote each key.
//!
//! Does NOT handle:
//! - Parsing or writing individual assignments (see `loader.rs`).
//!
//! Invariants / Assumptions:
//! - Variables present before the cascade beat every source; earlier sources
//!   beat later ones.
//! - The selector is read once, before the baseline is applied.
//! - The first failing step aborts the cascade; there are no retries.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::constants::{DEFAULT_SELECTOR, GENERIC_LOCAL_FILE, SELECTOR_VAR, selector_local_file};
use crate::error::{CascadeError, LoadError};
use crate::file::{ReadContent, SystemFiles};
use crate::loader::{ApplyReport, Loader};
use crate::paths::{SystemWorkingDir, WorkingDir};
use crate::table::{EnvTable, ProcessEnv};

/// A cascade source, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Baseline,
    SelectorLocal,
    GenericLocal,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Baseline, Source::SelectorLocal, Source::GenericLocal];

    pub fn as_str(self) -> &'static str {
        match self {
            Source::Baseline => "baseline",
            Source::SelectorLocal => "selector_local",
            Source::GenericLocal => "generic_local",
        }
    }

    /// Override file this source reads, or `None` for the embedded baseline.
    pub fn file_name(self, selector: &str) -> Option<String> {
        match self {
            Source::Baseline => None,
            Source::SelectorLocal => Some(selector_local_file(selector)),
            Source::GenericLocal => Some(GENERIC_LOCAL_FILE.to_string()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one completed cascade step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(flatten)]
    pub report: ApplyReport,
}

/// Outcome of a full cascade run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub selector: String,
    pub steps: Vec<SourceReport>,
}

impl CascadeReport {
    /// Which source wrote each key.
    pub fn provenance(&self) -> BTreeMap<String, Source> {
        self.steps
            .iter()
            .flat_map(|step| step.report.applied.iter().map(|key| (key.clone(), step.source)))
            .collect()
    }

    /// Keys some source assigned but that were already set before the cascade.
    pub fn preexisting(&self) -> BTreeSet<String> {
        let provenance = self.provenance();
        self.steps
            .iter()
            .flat_map(|step| step.report.skipped.iter())
            .filter(|key| !provenance.contains_key(*key))
            .cloned()
            .collect()
    }

    pub fn applied_count(&self) -> usize {
        self.steps.iter().map(|step| step.report.applied.len()).sum()
    }
}

/// Resolve the raw selector value; unset or empty means [`DEFAULT_SELECTOR`].
pub fn resolve_selector(raw: Option<&str>) -> &str {
    match raw {
        Some(selector) if !selector.is_empty() => selector,
        _ => DEFAULT_SELECTOR,
    }
}

/// Builder for a cascade run.
#[derive(Debug, Clone)]
pub struct Cascade<'a, W = SystemWorkingDir, R = SystemFiles> {
    baseline: &'a str,
    selector: Option<String>,
    loader: Loader<W, R>,
}

impl<'a> Cascade<'a> {
    /// Cascade over `baseline` with the production loader.
    pub fn new(baseline: &'a str) -> Self {
        Self {
            baseline,
            selector: None,
            loader: Loader::new(),
        }
    }
}

impl<'a, W: WorkingDir, R: ReadContent> Cascade<'a, W, R> {
    /// Use `selector` instead of reading [`SELECTOR_VAR`] from the table.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_loader<W2: WorkingDir, R2: ReadContent>(
        self,
        loader: Loader<W2, R2>,
    ) -> Cascade<'a, W2, R2> {
        Cascade {
            baseline: self.baseline,
            selector: self.selector,
            loader,
        }
    }

    pub fn loader(&self) -> &Loader<W, R> {
        &self.loader
    }

    /// Run baseline, selector override and local override into `table`.
    pub fn run<T>(&self, table: &mut T) -> Result<CascadeReport, CascadeError>
    where
        T: EnvTable + ?Sized,
    {
        let selector = match &self.selector {
            Some(selector) => resolve_selector(Some(selector.as_str())).to_string(),
            None => resolve_selector(table.get(SELECTOR_VAR).as_deref()).to_string(),
        };
        tracing::debug!(selector = %selector, "Resolved env selector");

        let mut steps = Vec::with_capacity(Source::ALL.len());

        let report = self
            .loader
            .apply(table, self.baseline)
            .map_err(CascadeError::Baseline)?;
        steps.push(step_done(Source::Baseline, None, report));

        for source in [Source::SelectorLocal, Source::GenericLocal] {
            let Some(file) = source.file_name(&selector) else {
                continue;
            };
            let report = match self.loader.load_optional(table, &file) {
                Ok(report) => report,
                Err(err) => return Err(override_failed(source, file, err)),
            };
            steps.push(step_done(source, Some(file), report));
        }

        Ok(CascadeReport { selector, steps })
    }
}

fn override_failed(source: Source, file: String, err: LoadError) -> CascadeError {
    match source {
        Source::SelectorLocal => CascadeError::SelectorLocal { file, source: err },
        _ => CascadeError::GenericLocal { file, source: err },
    }
}

fn step_done(source: Source, file: Option<String>, report: ApplyReport) -> SourceReport {
    tracing::info!(
        source = %source,
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        "Env source loaded"
    );
    SourceReport {
        source,
        file,
        report,
    }
}

/// Populate the process environment from `baseline`, `.env.<ENV>.local` and
/// `.env.local`, never replacing variables that are already set.
///
/// `baseline` is usually embedded with `include_str!`. Call this once at
/// startup, before other threads read the environment.
pub fn auto_load(baseline: &str) -> Result<CascadeReport, CascadeError> {
    Cascade::new(baseline).run(&mut ProcessEnv)
}
