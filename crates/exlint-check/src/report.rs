//! Aggregated results and their rendering.

use std::collections::BTreeMap;
use std::io::{self, Write};

use exlint_core::ProjectPath;
use serde::{Serialize, Serializer};

use crate::ValidationOutcome;

/// Identity and outcome of one checked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResult {
    pub identity: String,
    pub outcome: ValidationOutcome,
}

/// Outcomes of a complete run, keyed by project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    results: BTreeMap<ProjectPath, ProjectResult>,
}

impl CheckReport {
    #[must_use]
    pub fn new(results: BTreeMap<ProjectPath, ProjectResult>) -> Self {
        Self { results }
    }

    /// True when every project passed (vacuously true for no projects).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.results.values().all(|r| r.outcome.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ProjectPath, &ProjectResult)> {
        self.results.iter().filter(|(_, r)| !r.outcome.is_ok())
    }

    #[must_use]
    pub fn results(&self) -> &BTreeMap<ProjectPath, ProjectResult> {
        &self.results
    }

    #[must_use]
    pub fn get(&self, project: &ProjectPath) -> Option<&ProjectResult> {
        self.results.get(project)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn ok_count(&self) -> usize {
        self.results.values().filter(|r| r.outcome.is_ok()).count()
    }

    #[must_use]
    pub fn exit_status(&self) -> ExitStatus {
        if self.passed() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl Serialize for CheckReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            passed: bool,
            checked: usize,
            failed: usize,
            projects: &'a BTreeMap<ProjectPath, ProjectResult>,
        }

        View {
            passed: self.passed(),
            checked: self.len(),
            failed: self.len() - self.ok_count(),
            projects: &self.results,
        }
        .serialize(serializer)
    }
}

/// Run verdict, translated to a process exit code by the binary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One summary line on stdout.
    #[default]
    Text,
    /// The whole report as pretty JSON on stdout.
    Json,
}

pub const SUCCESS_SUMMARY: &str = "Linting the examples succeeded.";
pub const FAILURE_SUMMARY: &str = "Linting the examples failed. One or more examples don't have a package.json with the right name. See stderr for more information about them.";

/// Writes per-project diagnostics to `err` and the summary to `out`.
pub struct Reporter<O, E> {
    out: O,
    err: E,
    manifest_file: String,
    format: ReportFormat,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, manifest_file: impl Into<String>, format: ReportFormat) -> Self {
        Self {
            out,
            err,
            manifest_file: manifest_file.into(),
            format,
        }
    }

    /// Emit one diagnostic per failing project, then the summary.
    ///
    /// # Errors
    ///
    /// Propagates write failures on either sink.
    pub fn report(&mut self, report: &CheckReport) -> io::Result<ExitStatus> {
        for (project, result) in report.failures() {
            if let Some(line) = diagnostic(project, &result.outcome, &self.manifest_file) {
                writeln!(self.err, "{line}")?;
            }
        }

        match self.format {
            ReportFormat::Text => {
                let summary = if report.passed() {
                    SUCCESS_SUMMARY
                } else {
                    FAILURE_SUMMARY
                };
                writeln!(self.out, "{summary}")?;
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        self.err.flush()?;

        tracing::info!(
            checked = report.len(),
            failed = report.len() - report.ok_count(),
            "example lint finished"
        );
        Ok(report.exit_status())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Human-readable line describing a failing outcome; `None` for `Ok`.
#[must_use]
pub fn diagnostic(
    project: &ProjectPath,
    outcome: &ValidationOutcome,
    manifest_file: &str,
) -> Option<String> {
    let line = match outcome {
        ValidationOutcome::Ok => return None,
        ValidationOutcome::MissingManifest => format!(
            "Error: Found example in directory '{project}' but there is no {manifest_file}."
        ),
        ValidationOutcome::InvalidManifest { reason } => format!(
            "Error: Found example in directory '{project}' but its {manifest_file} could not be read ({reason})"
        ),
        ValidationOutcome::IdentityMismatch { expected, actual } => format!(
            "Error: Found example in directory '{project}' but the name in the {manifest_file} is not \"{expected}\" (it is \"{}\")",
            actual.as_deref().unwrap_or("undefined")
        ),
        ValidationOutcome::NotInRegistry { .. } => format!(
            "Error: Found example in directory '{project}' with a {manifest_file} and the right name but the workspace registry does not recognize that package."
        ),
    };
    Some(line)
}
