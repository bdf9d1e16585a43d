//! # exlint-discovery
//!
//! Locates example projects below a search root.
//!
//! A directory is a *project root* when its immediate listing contains one of
//! the configured marker files (see [`MarkerSet`]). The walk stops at project
//! roots, so tool directories nested inside an example are never reported as
//! examples of their own.

pub mod classify;
pub mod locate;

mod error;

pub use classify::{MarkerSet, is_project_root};
pub use error::DiscoveryError;
pub use locate::{LocateOptions, find_projects};
