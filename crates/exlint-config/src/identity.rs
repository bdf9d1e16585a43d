//! Package naming rule.

use serde::{Deserialize, Serialize};

fn default_namespace() -> String {
    exlint_core::identity::DEFAULT_NAMESPACE.to_string()
}

fn default_joiner() -> String {
    exlint_core::identity::DEFAULT_JOINER.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Prefix of every expected package name (e.g. `@examples/`).
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Replacement for path separators.
    #[serde(default = "default_joiner")]
    pub joiner: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            joiner: default_joiner(),
        }
    }
}
