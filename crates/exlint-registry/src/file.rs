//! Registry listing saved to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{RegistryError, RegistryListing, RegistrySource};

#[derive(Debug, Clone)]
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RegistrySource for FileRegistry {
    fn fetch(&self) -> Result<RegistryListing, RegistryError> {
        let json = fs::read_to_string(&self.path).map_err(|source| RegistryError::Read {
            path: self.path.clone(),
            source,
        })?;
        RegistryListing::parse(&json, &self.describe())
    }

    fn describe(&self) -> String {
        format!("'{}'", self.path.display())
    }
}
