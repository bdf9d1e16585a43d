//! A complete lint run: discover, derive, fetch the registry, reconcile.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use exlint_core::{IdentityRule, ProjectPath};
use exlint_discovery::{LocateOptions, find_projects};
use exlint_registry::RegistrySource;
use rayon::prelude::*;

use crate::{CheckError, CheckReport, ProjectResult, Reconciler};

/// Everything a run needs besides the repository root and the registry.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Search root, relative to the repository root.
    pub examples_dir: PathBuf,
    pub locate: LocateOptions,
    pub rule: IdentityRule,
    /// Manifest filename inside each project.
    pub manifest_file: String,
    /// Reconciliation workers; `0` = available parallelism, `1` = inline.
    pub jobs: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            examples_dir: PathBuf::from("examples"),
            locate: LocateOptions::default(),
            rule: IdentityRule::default(),
            manifest_file: "package.json".to_string(),
            jobs: 0,
        }
    }
}

/// Locate every project and derive its expected identity.
///
/// # Errors
///
/// [`CheckError::Discovery`] if the tree cannot be walked,
/// [`CheckError::Identity`] if two projects derive the same identity.
pub fn discover(
    repo_root: &Path,
    options: &CheckOptions,
) -> Result<BTreeMap<ProjectPath, String>, CheckError> {
    let projects = find_projects(repo_root, &options.examples_dir, &options.locate)?;
    tracing::debug!(count = projects.len(), "discovered example projects");
    Ok(options.rule.derive_all(&projects)?)
}

/// Full run. The registry is queried once, after discovery and before any
/// project is reconciled.
///
/// # Errors
///
/// Any fatal [`CheckError`]. Per-project failures are in the report.
pub fn run_check(
    repo_root: &Path,
    options: &CheckOptions,
    registry: &dyn RegistrySource,
) -> Result<CheckReport, CheckError> {
    let projects = discover(repo_root, options)?;

    tracing::debug!(source = %registry.describe(), "fetching registry listing");
    let listing = registry.fetch()?;

    let reconciler = Reconciler::new(repo_root, &options.manifest_file, &listing);
    reconcile_all(&reconciler, &projects, options.jobs)
}

/// Reconcile every project, on a worker pool unless `jobs == 1`.
///
/// The report does not depend on `jobs`: outcomes are keyed by project.
///
/// # Errors
///
/// [`CheckError::ThreadPool`] if the worker pool cannot be built.
pub fn reconcile_all(
    reconciler: &Reconciler<'_>,
    projects: &BTreeMap<ProjectPath, String>,
    jobs: usize,
) -> Result<CheckReport, CheckError> {
    let check = |(project, identity): (&ProjectPath, &String)| {
        let outcome = reconciler.reconcile(project, identity);
        tracing::debug!(project = %project, outcome = outcome.kind(), "checked example");
        (
            project.clone(),
            ProjectResult {
                identity: identity.clone(),
                outcome,
            },
        )
    };

    let results: BTreeMap<ProjectPath, ProjectResult> = if jobs == 1 {
        projects.iter().map(check).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
        pool.install(|| projects.par_iter().map(check).collect())
    };

    Ok(CheckReport::new(results))
}
