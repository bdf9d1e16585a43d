//! Relative paths of discovered example projects.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::CoreError;

/// A project root, relative to the repository root.
///
/// Stored as its normal path segments so that rendering and identity
/// derivation use `/` regardless of the host separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectPath {
    segments: Vec<String>,
}

impl ProjectPath {
    /// Build a project path from a relative filesystem path.
    ///
    /// `.` components are skipped. Absolute paths, `..` components, empty
    /// paths and non UTF-8 segments are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the path is not a plain
    /// relative path.
    pub fn from_relative(path: &Path) -> Result<Self, CoreError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment.to_str().ok_or_else(|| {
                        CoreError::Validation(format!(
                            "project path '{}' is not valid UTF-8",
                            path.display()
                        ))
                    })?;
                    segments.push(segment.to_string());
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(CoreError::Validation(format!(
                        "project path '{}' must be relative to the repository root",
                        path.display()
                    )));
                }
            }
        }

        if segments.is_empty() {
            return Err(CoreError::Validation(
                "project path must not be empty".to_string(),
            ));
        }

        Ok(Self { segments })
    }

    /// Parse a `/`-separated relative path, e.g. `examples/go/docker`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProjectPath::from_relative`].
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        Self::from_relative(Path::new(path))
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path as a native relative `PathBuf`, for joining onto a root.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Resolve against the repository root.
    #[must_use]
    pub fn under(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(self.to_path_buf())
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl Serialize for ProjectPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_path() {
        let path = ProjectPath::parse("examples/go/docker").unwrap();
        assert_eq!(path.segments(), ["examples", "go", "docker"]);
        assert_eq!(path.to_string(), "examples/go/docker");
    }

    #[test]
    fn skips_current_dir_components() {
        let path = ProjectPath::parse("./examples/./python").unwrap();
        assert_eq!(path.to_string(), "examples/python");
    }

    #[test]
    fn rejects_parent_dir() {
        let err = ProjectPath::parse("examples/../secrets").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_absolute_and_empty() {
        assert!(ProjectPath::parse("/examples/go").is_err());
        assert!(ProjectPath::parse("").is_err());
        assert!(ProjectPath::parse(".").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_utf8_segment() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("examples").join(OsStr::from_bytes(b"go-\xff"));
        let err = ProjectPath::from_relative(&path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }

    #[test]
    fn resolves_under_root() {
        let path = ProjectPath::parse("examples/go/docker").unwrap();
        assert_eq!(
            path.under(Path::new("/repo")),
            Path::new("/repo").join("examples").join("go").join("docker")
        );
    }

    #[test]
    fn serializes_as_slash_string() {
        let path = ProjectPath::parse("examples/typescript/aws").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"examples/typescript/aws\"");
    }

    #[test]
    fn orders_by_segments() {
        let mut paths = vec![
            ProjectPath::parse("examples/typescript/aws").unwrap(),
            ProjectPath::parse("examples/go/docker").unwrap(),
            ProjectPath::parse("examples/go").unwrap(),
        ];
        paths.sort();
        let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["examples/go", "examples/go/docker", "examples/typescript/aws"]
        );
    }
}
