//! Registry error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from querying the workspace registry. Every variant is fatal for a
/// lint run: without the listing no project can be reconciled.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry program could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The registry program exited unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// A listing file could not be read.
    #[error("cannot read registry listing '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The listing is not a JSON array of package records.
    #[error("parse error in registry listing from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
