//! # exlint-config
//!
//! Layered configuration loading for exlint using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXLINT_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Repository-level `.exlint.toml`
//! 4. User-level `~/.config/exlint/config.toml`
//! 5. Built-in defaults
//!
//! Command-line flags are applied by the binary on top of the extracted
//! value, followed by [`ExlintConfig::validate`].
//!
//! # Environment Variable Mapping
//!
//! `EXLINT_LAYOUT__EXAMPLES_DIR` -> `layout.examples_dir`,
//! `EXLINT_REGISTRY__LISTING_FILE` -> `registry.listing_file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use exlint_config::ExlintConfig;
//!
//! let config = ExlintConfig::load(Path::new("."), None).expect("config");
//! println!("searching {}", config.layout.examples_dir);
//! ```

mod check;
mod error;
mod identity;
mod layout;
mod registry;

pub use check::CheckConfig;
pub use error::ConfigError;
pub use identity::IdentityConfig;
pub use layout::LayoutConfig;
pub use registry::RegistryConfig;

use std::path::{Path, PathBuf};

use exlint_core::IdentityRule;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the repository-local config file.
pub const REPO_CONFIG_FILE: &str = ".exlint.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExlintConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

impl ExlintConfig {
    /// Load and validate configuration for the repository at `repo_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the merged
    /// result fails [`ExlintConfig::validate`].
    pub fn load(repo_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::extract(repo_root, explicit)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge all sources without validating.
    ///
    /// The binary uses this to apply flag overrides before calling
    /// [`ExlintConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `explicit` does not exist, or
    /// [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn extract(repo_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
        }
        Self::figment(repo_root, explicit)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(repo_root: &Path, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Repository config
        let repo_path = repo_root.join(REPO_CONFIG_FILE);
        if repo_path.exists() {
            figment = figment.merge(Toml::file(repo_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("EXLINT_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("exlint").join("config.toml"))
    }

    /// Reject values the linter cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_layout()?;
        if self.registry.listing_file().is_none() && self.registry.program.trim().is_empty() {
            return Err(ConfigError::invalid(
                "registry.program",
                "required when registry.listing_file is not set",
            ));
        }
        Ok(())
    }

    /// The subset of [`ExlintConfig::validate`] needed to discover projects
    /// without querying the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate_layout(&self) -> Result<(), ConfigError> {
        if self.layout.examples_dir.trim().is_empty() {
            return Err(ConfigError::invalid(
                "layout.examples_dir",
                "must not be empty",
            ));
        }
        if self.layout.markers.is_empty() {
            return Err(ConfigError::invalid(
                "layout.markers",
                "at least one marker file is required",
            ));
        }
        if let Some(marker) = self
            .layout
            .markers
            .iter()
            .find(|m| m.is_empty() || m.contains(['/', '\\']))
        {
            return Err(ConfigError::invalid(
                "layout.markers",
                format!("'{marker}' is not a plain file name"),
            ));
        }
        if self.layout.manifest.is_empty() || self.layout.manifest.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "layout.manifest",
                "must be a plain file name",
            ));
        }
        if self.layout.max_depth == 0 {
            return Err(ConfigError::invalid(
                "layout.max_depth",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// The identity rule implied by the layout and identity sections.
    #[must_use]
    pub fn identity_rule(&self) -> IdentityRule {
        IdentityRule::new(
            self.layout.examples_dir.clone(),
            self.identity.namespace.clone(),
            self.identity.joiner.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ExlintConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.layout.examples_dir, "examples");
        assert_eq!(config.identity.namespace, "@examples/");
        assert_eq!(config.identity.joiner, "-");
        assert_eq!(config.check.jobs, 0);
    }

    #[test]
    fn identity_rule_uses_layout_container() {
        let mut config = ExlintConfig::default();
        config.layout.examples_dir = "./samples".to_string();
        let rule = config.identity_rule();
        let path = exlint_core::ProjectPath::parse("samples/go/docker").unwrap();
        assert_eq!(rule.derive(&path), "@examples/go-docker");
    }

    #[test]
    fn rejects_empty_markers() {
        let mut config = ExlintConfig::default();
        config.layout.markers.clear();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "layout.markers"));
    }

    #[test]
    fn rejects_marker_with_separator() {
        let mut config = ExlintConfig::default();
        config.layout.markers = vec!["nested/package.json".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_depth() {
        let mut config = ExlintConfig::default();
        config.layout.max_depth = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("layout.max_depth"));
    }

    #[test]
    fn empty_program_is_fine_with_listing_file() {
        let mut config = ExlintConfig::default();
        config.registry.program = String::new();
        assert!(config.validate().is_err());

        config.registry.listing_file = "packages.json".to_string();
        config.validate().expect("listing file replaces the command");
    }

    #[test]
    fn layout_validation_ignores_registry() {
        let mut config = ExlintConfig::default();
        config.registry.program = String::new();
        config.validate_layout().expect("registry is not needed for discovery");

        config.layout.max_depth = 0;
        assert!(config.validate_layout().is_err());
    }
}
