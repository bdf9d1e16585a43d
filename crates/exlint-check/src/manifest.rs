//! Reading the declared package name from a project manifest.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

/// What was found at a project's manifest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestName {
    Missing,
    Invalid(String),
    /// The manifest parsed; `None` when it declares no `name`.
    Declared(Option<String>),
}

/// Read `path` and extract its `name` field.
///
/// A non-string `name` is rendered as JSON so it still shows up in
/// diagnostics.
#[must_use]
pub fn read_manifest_name(path: &Path) -> ManifestName {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return ManifestName::Missing,
        Err(error) => return ManifestName::Invalid(error.to_string()),
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(error) => return ManifestName::Invalid(format!("invalid JSON: {error}")),
    };

    let Some(object) = value.as_object() else {
        return ManifestName::Invalid("manifest is not a JSON object".to_string());
    };

    let name = object.get("name").map(|name| match name {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    });
    ManifestName::Declared(name)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"{"name": "@examples/go-docker", "private": true}"#, Some("@examples/go-docker"))]
    #[case(r#"{"private": true}"#, None)]
    #[case(r#"{"name": 42}"#, Some("42"))]
    fn declared_names(#[case] json: &str, #[case] expected: Option<&str>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, json).unwrap();
        assert_eq!(
            read_manifest_name(&path),
            ManifestName::Declared(expected.map(String::from))
        );
    }

    #[test]
    fn missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            read_manifest_name(&dir.path().join("package.json")),
            ManifestName::Missing
        );
    }

    #[rstest]
    #[case::truncated("{\"name\": ")]
    #[case::array("[]")]
    #[case::string("\"@examples/go-docker\"")]
    fn invalid_manifest(#[case] json: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, json).unwrap();
        assert!(matches!(read_manifest_name(&path), ManifestName::Invalid(_)));
    }

    #[test]
    fn directory_in_place_of_manifest_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::create_dir(&path).unwrap();
        assert!(matches!(read_manifest_name(&path), ManifestName::Invalid(_)));
    }
}
