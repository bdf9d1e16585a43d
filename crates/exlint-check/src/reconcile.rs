//! Three-way check of one project: directory, manifest, registry.

use std::path::Path;

use exlint_core::ProjectPath;
use exlint_registry::RegistryListing;

use crate::ValidationOutcome;
use crate::manifest::{ManifestName, read_manifest_name};

/// Checks projects against their manifests and an already-fetched listing.
///
/// Holds only shared borrows, so one reconciler can be used from many worker
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    repo_root: &'a Path,
    manifest_file: &'a str,
    listing: &'a RegistryListing,
}

impl<'a> Reconciler<'a> {
    #[must_use]
    pub const fn new(
        repo_root: &'a Path,
        manifest_file: &'a str,
        listing: &'a RegistryListing,
    ) -> Self {
        Self {
            repo_root,
            manifest_file,
            listing,
        }
    }

    /// Check one project whose derived identity is `expected`.
    ///
    /// Stops at the first failing step for this project.
    #[must_use]
    pub fn reconcile(&self, project: &ProjectPath, expected: &str) -> ValidationOutcome {
        let manifest_path = project.under(self.repo_root).join(self.manifest_file);

        let declared = match read_manifest_name(&manifest_path) {
            ManifestName::Missing => return ValidationOutcome::MissingManifest,
            ManifestName::Invalid(reason) => return ValidationOutcome::InvalidManifest { reason },
            ManifestName::Declared(name) => name,
        };

        if declared.as_deref() != Some(expected) {
            return ValidationOutcome::IdentityMismatch {
                expected: expected.to_string(),
                actual: declared,
            };
        }

        if !self.listing.contains(expected) {
            return ValidationOutcome::NotInRegistry {
                expected: expected.to_string(),
            };
        }

        ValidationOutcome::Ok
    }
}
