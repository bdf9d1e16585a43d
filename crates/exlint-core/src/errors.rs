//! Cross-cutting error types for exlint.
//!
//! Domain-specific errors (`DiscoveryError`, `RegistryError`, `CheckError`)
//! are defined in their respective crates. The binary converges them through
//! `anyhow`.

use thiserror::Error;

use crate::ProjectPath;

/// Errors that can be raised while deriving project identities.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two distinct project paths derive the same package name.
    #[error("identity collision: '{first}' and '{second}' both derive \"{identity}\"")]
    IdentityCollision {
        identity: String,
        first: ProjectPath,
        second: ProjectPath,
    },

    /// Data failed validation (rule parameters, path shape).
    #[error("Validation error: {0}")]
    Validation(String),
}
