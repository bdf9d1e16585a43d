//! Project root classification.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::DiscoveryError;

/// Filenames whose presence marks a directory as a project root.
///
/// Only names are compared; marker contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    names: BTreeSet<String>,
}

impl Default for MarkerSet {
    /// `cdktf.json` (infrastructure tool config) and `package.json`.
    fn default() -> Self {
        Self::new(["cdktf.json", "package.json"])
    }
}

impl MarkerSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Whether `dir`'s immediate listing contains any marker filename.
///
/// # Errors
///
/// Returns [`DiscoveryError::Io`] if the directory cannot be listed.
pub fn is_project_root(dir: &Path, markers: &MarkerSet) -> Result<bool, DiscoveryError> {
    let entries = fs::read_dir(dir).map_err(|e| DiscoveryError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::io(dir, e))?;
        if entry.file_name().to_str().is_some_and(|name| markers.contains(name)) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::cdktf_config(&["cdktf.json"], true)]
    #[case::package_manifest(&["package.json"], true)]
    #[case::both(&["cdktf.json", "package.json", "main.ts"], true)]
    #[case::neither(&["main.ts", "README.md"], false)]
    #[case::empty(&[], false)]
    #[case::lookalike(&["package.json.bak", "cdktf.jsonc"], false)]
    fn classifies_by_immediate_listing(#[case] files: &[&str], #[case] expected: bool) {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            fs::write(dir.path().join(file), "{}").unwrap();
        }
        assert_eq!(is_project_root(dir.path(), &MarkerSet::default()).unwrap(), expected);
    }

    #[test]
    fn nested_marker_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("package.json"), "{}").unwrap();
        assert!(!is_project_root(dir.path(), &MarkerSet::default()).unwrap());
    }

    #[test]
    fn marker_named_directory_counts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("cdktf.json")).unwrap();
        assert!(is_project_root(dir.path(), &MarkerSet::default()).unwrap());
    }

    #[test]
    fn custom_markers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Pulumi.yaml"), "name: x").unwrap();
        assert!(!is_project_root(dir.path(), &MarkerSet::default()).unwrap());
        assert!(is_project_root(dir.path(), &MarkerSet::new(["Pulumi.yaml"])).unwrap());
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = is_project_root(&missing, &MarkerSet::default()).unwrap_err();
        assert!(matches!(err, DiscoveryError::Io { ref path, .. } if path == &missing));
    }
}
