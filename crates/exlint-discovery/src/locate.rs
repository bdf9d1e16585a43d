//! Example tree walking.
//!
//! Built on `ignore::WalkBuilder` with every standard filter off: hidden and
//! git-ignored directories are still searched. Once a directory is classified
//! as a project root, `filter_entry` prunes everything below it.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use exlint_core::ProjectPath;
use ignore::WalkBuilder;

use crate::{DiscoveryError, MarkerSet, is_project_root};

/// Default bound on directory depth below the search root.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone)]
pub struct LocateOptions {
    pub markers: MarkerSet,
    /// Deepest level (search root = 0) at which a directory may be visited.
    pub max_depth: usize,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            markers: MarkerSet::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Project roots found so far, shared with the walker's entry filter.
type Roots = Arc<Mutex<BTreeSet<PathBuf>>>;

/// Find every project root at or below `repo_root/search_root`.
///
/// Returned paths are relative to `repo_root`. Symbolic links to directories
/// are followed; a link that leads back to a directory already on the current
/// path is reported as a cycle, and a project whose real location is outside
/// the repository is rejected.
///
/// # Errors
///
/// Any [`DiscoveryError`]: the project set would be incomplete, so nothing is
/// returned.
pub fn find_projects(
    repo_root: &Path,
    search_root: &Path,
    options: &LocateOptions,
) -> Result<BTreeSet<ProjectPath>, DiscoveryError> {
    let start = repo_root.join(search_root);
    if !start.is_dir() {
        return Err(DiscoveryError::SearchRootMissing(start));
    }
    let canonical_root = fs::canonicalize(repo_root).map_err(|e| DiscoveryError::io(repo_root, e))?;

    let roots: Roots = Arc::default();
    let filter_roots = Arc::clone(&roots);

    // One level past the limit is listed so that overly deep directories are
    // reported instead of silently skipped.
    let walker = WalkBuilder::new(&start)
        .standard_filters(false)
        .hidden(false)
        .follow_links(true)
        .max_depth(Some(options.max_depth.saturating_add(1)))
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            entry.file_type().is_some_and(|ft| ft.is_dir())
                && !inside_project(&filter_roots, entry.path())
        })
        .build();

    let mut projects = BTreeSet::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(error) => {
                skip_or_fail(&roots, error, &start)?;
                continue;
            }
        };

        let dir = entry.path();
        if entry.depth() > options.max_depth {
            return Err(DiscoveryError::DepthExceeded {
                path: dir.to_path_buf(),
                max_depth: options.max_depth,
            });
        }

        if is_project_root(dir, &options.markers)? {
            ensure_inside(&canonical_root, repo_root, dir)?;
            let project = relative_project(repo_root, dir)?;
            tracing::debug!(project = %project, "found project root");
            roots
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(dir.to_path_buf());
            projects.insert(project);
        } else {
            tracing::trace!(dir = %dir.display(), depth = entry.depth(), "searching directory");
        }
    }

    Ok(projects)
}

fn inside_project(roots: &Mutex<BTreeSet<PathBuf>>, path: &Path) -> bool {
    path.parent().is_some_and(|parent| {
        roots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(parent)
    })
}

/// Walk errors below a project root are never looked at; dangling symbolic
/// links are skipped with a warning; everything else aborts the walk.
fn skip_or_fail(roots: &Roots, error: ignore::Error, start: &Path) -> Result<(), DiscoveryError> {
    if let Some(path) = error_path(&error) {
        if inside_project(roots, path) {
            tracing::trace!(path = %path.display(), %error, "ignoring entry inside a project");
            return Ok(());
        }
        let dangling = error
            .io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
            && fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
        if dangling {
            tracing::warn!(path = %path.display(), %error, "skipping dangling symbolic link");
            return Ok(());
        }
    }
    Err(walk_error(error, start))
}

fn error_path(error: &ignore::Error) -> Option<&Path> {
    match error {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

fn walk_error(error: ignore::Error, fallback: &Path) -> DiscoveryError {
    match error {
        ignore::Error::Loop { ancestor, child } => DiscoveryError::SymlinkCycle {
            path: child,
            target: ancestor,
        },
        ignore::Error::WithPath { path, err } => walk_error(*err, &path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error(*err, fallback)
        }
        ignore::Error::Io(source) => DiscoveryError::io(fallback, source),
        other => DiscoveryError::Walk {
            path: fallback.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

/// A project reached through a symbolic link must still live in the repository.
fn ensure_inside(canonical_root: &Path, repo_root: &Path, dir: &Path) -> Result<(), DiscoveryError> {
    let target = fs::canonicalize(dir).map_err(|e| DiscoveryError::io(dir, e))?;
    if target.starts_with(canonical_root) {
        Ok(())
    } else {
        Err(DiscoveryError::OutsideRoot {
            path: target,
            root: repo_root.to_path_buf(),
        })
    }
}

fn relative_project(repo_root: &Path, dir: &Path) -> Result<ProjectPath, DiscoveryError> {
    let relative = dir
        .strip_prefix(repo_root)
        .map_err(|_| DiscoveryError::OutsideRoot {
            path: dir.to_path_buf(),
            root: repo_root.to_path_buf(),
        })?;
    Ok(ProjectPath::from_relative(relative)?)
}
