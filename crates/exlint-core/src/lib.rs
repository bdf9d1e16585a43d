//! # exlint-core
//!
//! Shared types for the exlint example linter:
//!
//! - [`ProjectPath`]: a discovered project root, relative to the repository root.
//! - [`IdentityRule`]: the path-to-package-name derivation rule.
//! - [`CoreError`]: errors that can originate from identity handling.
//!
//! This crate performs no IO. Discovery lives in `exlint-discovery`, registry
//! access in `exlint-registry`, and reconciliation in `exlint-check`.

pub mod errors;
pub mod identity;
pub mod project;

pub use errors::CoreError;
pub use identity::IdentityRule;
pub use project::ProjectPath;
