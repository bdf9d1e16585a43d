//! Discovery error types.

use std::path::PathBuf;

/// Errors that make the discovered project set unreliable. All of them abort
/// the run.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// A directory could not be listed or inspected.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The search root does not exist or is not a directory.
    #[error("search root '{}' is not a directory", .0.display())]
    SearchRootMissing(PathBuf),

    /// The walk went deeper than the configured limit.
    #[error("'{}' is deeper than the maximum search depth of {max_depth}", path.display())]
    DepthExceeded { path: PathBuf, max_depth: usize },

    /// A symbolic link leads back to a directory already on the current path.
    #[error("symbolic link cycle: '{}' leads back to '{}'", path.display(), target.display())]
    SymlinkCycle { path: PathBuf, target: PathBuf },

    /// The walker failed for a reason other than IO or a link cycle.
    #[error("cannot walk '{}': {reason}", path.display())]
    Walk { path: PathBuf, reason: String },

    /// A discovered directory is not below the repository root.
    #[error("'{}' is outside the repository root '{}'", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// A discovered path could not be turned into a project path.
    #[error(transparent)]
    Path(#[from] exlint_core::CoreError),
}

impl DiscoveryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
