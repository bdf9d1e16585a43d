//! Repository layout: where examples live and how they are recognised.

use serde::{Deserialize, Serialize};

fn default_examples_dir() -> String {
    "examples".to_string()
}

fn default_markers() -> Vec<String> {
    vec!["cdktf.json".to_string(), "package.json".to_string()]
}

fn default_manifest() -> String {
    "package.json".to_string()
}

/// Maximum directory depth below the examples directory.
const fn default_max_depth() -> usize {
    32
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Directory (relative to the repo root) searched for example projects.
    #[serde(default = "default_examples_dir")]
    pub examples_dir: String,

    /// Filenames whose presence makes a directory a project root.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// Manifest file declaring the project's package name.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            examples_dir: default_examples_dir(),
            markers: default_markers(),
            manifest: default_manifest(),
            max_depth: default_max_depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LayoutConfig::default();
        assert_eq!(config.examples_dir, "examples");
        assert_eq!(config.markers, ["cdktf.json", "package.json"]);
        assert_eq!(config.manifest, "package.json");
        assert_eq!(config.max_depth, 32);
    }
}
