//! Path-to-package-name derivation.
//!
//! An example at `examples/<lang>/<name>/<sub>` must be published as
//! `@examples/<lang>-<name>-<sub>`. The rule is pure string work on the
//! segments of a [`ProjectPath`]; it never touches the filesystem.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CoreError, ProjectPath};

/// Default name of the directory holding all examples.
pub const DEFAULT_CONTAINER: &str = "examples";
/// Default namespace prefix of derived package names.
pub const DEFAULT_NAMESPACE: &str = "@examples/";
/// Default string placed between path segments.
pub const DEFAULT_JOINER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRule {
    /// Leading path (`/`-separated) stripped from every project path.
    pub container: String,
    /// Prefix of every derived identity.
    pub namespace: String,
    /// Replacement for path separators.
    pub joiner: String,
}

impl Default for IdentityRule {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            joiner: DEFAULT_JOINER.to_string(),
        }
    }
}

impl IdentityRule {
    #[must_use]
    pub fn new(
        container: impl Into<String>,
        namespace: impl Into<String>,
        joiner: impl Into<String>,
    ) -> Self {
        Self {
            container: container.into(),
            namespace: namespace.into(),
            joiner: joiner.into(),
        }
    }

    /// Derive the expected package name for `path`.
    ///
    /// The container prefix is only stripped when something follows it, so a
    /// project sitting directly at `examples/` derives `@examples/examples`.
    #[must_use]
    pub fn derive(&self, path: &ProjectPath) -> String {
        let segments = path.segments();
        let prefix = self.container_segments();
        let rest = if segments.len() > prefix.len()
            && segments.iter().zip(&prefix).all(|(seg, pre)| seg == pre)
        {
            &segments[prefix.len()..]
        } else {
            segments
        };
        format!("{}{}", self.namespace, rest.join(self.joiner.as_str()))
    }

    fn container_segments(&self) -> Vec<&str> {
        self.container
            .split(['/', '\\'])
            .filter(|seg| !seg.is_empty() && *seg != ".")
            .collect()
    }

    /// Derive identities for every path, failing on the first collision.
    ///
    /// Paths such as `examples/a-b` and `examples/a/b` both collapse to
    /// `@examples/a-b`; that makes one of them unverifiable, so the whole run
    /// is rejected rather than guessing which one is meant.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdentityCollision`] naming both paths.
    pub fn derive_all<'a, I>(&self, paths: I) -> Result<BTreeMap<ProjectPath, String>, CoreError>
    where
        I: IntoIterator<Item = &'a ProjectPath>,
    {
        let mut by_identity: BTreeMap<String, &ProjectPath> = BTreeMap::new();
        let mut derived = BTreeMap::new();

        for path in paths {
            let identity = self.derive(path);
            if let Some(first) = by_identity.get(&identity) {
                if *first != path {
                    return Err(CoreError::IdentityCollision {
                        identity,
                        first: (*first).clone(),
                        second: path.clone(),
                    });
                }
                continue;
            }
            tracing::trace!(project = %path, %identity, "derived identity");
            by_identity.insert(identity.clone(), path);
            derived.insert(path.clone(), identity);
        }

        Ok(derived)
    }
}
