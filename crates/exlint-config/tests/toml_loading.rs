//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use std::path::Path;

use exlint_config::{ConfigError, ExlintConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_layout_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[layout]
examples_dir = "samples"
markers = ["stack.json"]
manifest = "manifest.json"
max_depth = 4
"#,
        )?;

        let config: ExlintConfig = Figment::from(Serialized::defaults(ExlintConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.layout.examples_dir, "samples");
        assert_eq!(config.layout.markers, ["stack.json"]);
        assert_eq!(config.layout.manifest, "manifest.json");
        assert_eq!(config.layout.max_depth, 4);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[identity]
namespace = "@samples/"
"#,
        )?;

        let config: ExlintConfig = Figment::from(Serialized::defaults(ExlintConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.identity.namespace, "@samples/");
        assert_eq!(config.identity.joiner, "-");
        assert_eq!(config.layout.markers, ["cdktf.json", "package.json"]);
        assert_eq!(config.registry.program, "npx");
        Ok(())
    });
}

#[test]
fn repo_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".exlint.toml",
            r#"
[registry]
listing_file = "ci/packages.json"

[check]
jobs = 3
"#,
        )?;

        let config = ExlintConfig::load(jail.directory(), None).expect("config loads");
        assert_eq!(
            config.registry.listing_file(),
            Some(Path::new("ci/packages.json"))
        );
        assert_eq!(config.check.jobs, 3);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_repo_config() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".exlint.toml",
            r#"
[layout]
examples_dir = "from-repo"
max_depth = 8
"#,
        )?;
        jail.create_file(
            "override.toml",
            r#"
[layout]
examples_dir = "from-explicit"
"#,
        )?;

        let explicit = jail.directory().join("override.toml");
        let config = ExlintConfig::load(jail.directory(), Some(&explicit)).expect("config loads");
        assert_eq!(config.layout.examples_dir, "from-explicit");
        assert_eq!(config.layout.max_depth, 8);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|jail| {
        let explicit = jail.directory().join("nope.toml");
        let err = ExlintConfig::load(jail.directory(), Some(&explicit)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation_on_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".exlint.toml",
            r#"
[layout]
markers = []
"#,
        )?;

        let err = ExlintConfig::load(jail.directory(), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(".exlint.toml", "[layout\nexamples_dir = 1")?;
        let err = ExlintConfig::load(jail.directory(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
