//! # exlint-registry
//!
//! Workspace package listings used as ground truth for "is this example wired
//! into the build".
//!
//! The listing is produced by an external tool (by default
//! `npx lerna list --all --json`) and consumed here as a JSON array of
//! `{name, version, private, location}` records. Only `name` is consulted by
//! the linter.
//!
//! Sources implement [`RegistrySource`]:
//! - [`CommandRegistry`]: runs the registry tool once per lint run.
//! - [`FileRegistry`]: reads a listing saved to disk (offline CI, tests).

pub mod command;
pub mod file;

mod error;

pub use command::CommandRegistry;
pub use error::RegistryError;
pub use file::FileRegistry;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ── Types ──────────────────────────────────────────────────────────

/// One workspace package as reported by the registry tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Package name (e.g., `@examples/go-docker`).
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Whether the package is marked private (never published).
    #[serde(default)]
    pub private: bool,
    /// Absolute directory of the package on the machine that listed it.
    #[serde(default)]
    pub location: Option<String>,
}

impl PackageRecord {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            private: false,
            location: None,
        }
    }
}

/// Read-only set of workspace packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryListing {
    records: Vec<PackageRecord>,
    names: BTreeSet<String>,
}

impl RegistryListing {
    #[must_use]
    pub fn new(records: Vec<PackageRecord>) -> Self {
        let names = records.iter().map(|r| r.name.clone()).collect();
        Self { records, names }
    }

    /// Parse a JSON array of package records.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] if `json` is not an array of objects
    /// with a string `name`.
    pub fn parse(json: &str, origin: &str) -> Result<Self, RegistryError> {
        let records: Vec<PackageRecord> =
            serde_json::from_str(json).map_err(|source| RegistryError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<PackageRecord> for RegistryListing {
    fn from_iter<T: IntoIterator<Item = PackageRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── Source ─────────────────────────────────────────────────────────

/// Something that can produce the workspace listing.
///
/// A lint run calls [`RegistrySource::fetch`] exactly once, before any
/// project is reconciled.
pub trait RegistrySource {
    /// # Errors
    ///
    /// Any [`RegistryError`]; callers treat it as fatal.
    fn fetch(&self) -> Result<RegistryListing, RegistryError>;

    /// Human-readable origin for logs and error messages.
    fn describe(&self) -> String;
}

impl RegistrySource for RegistryListing {
    fn fetch(&self) -> Result<RegistryListing, RegistryError> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory listing ({} packages)", self.len())
    }
}
