//! Workspace registry query configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

fn default_program() -> String {
    "npx".to_string()
}

fn default_args() -> Vec<String> {
    ["lerna", "list", "--all", "--json"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Program printing the workspace package listing as JSON.
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Pre-computed listing to read instead of running `program`.
    /// Empty means "run the command".
    #[serde(default)]
    pub listing_file: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            listing_file: String::new(),
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub fn listing_file(&self) -> Option<&Path> {
        if self.listing_file.is_empty() {
            None
        } else {
            Some(Path::new(&self.listing_file))
        }
    }
}
