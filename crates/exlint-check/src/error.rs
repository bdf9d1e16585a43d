//! Fatal errors of a lint run.

/// Errors that abort a lint run before or during reconciliation.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The example tree could not be walked completely.
    #[error("discovery failed: {0}")]
    Discovery(#[from] exlint_discovery::DiscoveryError),

    /// Identity derivation failed (e.g. two examples collapse to one name).
    #[error(transparent)]
    Identity(#[from] exlint_core::CoreError),

    /// The workspace registry could not be queried.
    #[error("registry query failed: {0}")]
    Registry(#[from] exlint_registry::RegistryError),

    /// The reconciliation worker pool could not be started.
    #[error("worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
