//! Filesystem storage handler
//!
//! Each key maps to `<base_path>/<key>.dat`. Keys containing `/` create
//! subdirectories.

use invento_core::effects::storage::{validate_key, StorageEffects, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem-based storage handler
///
/// Stateless: every call goes straight to the filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemStorageHandler {
    /// Base directory for storage files
    base_path: PathBuf,
}

impl FilesystemStorageHandler {
    /// Create a new filesystem storage handler rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Base directory
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{key}.dat")))
    }
}

impl StorageEffects for FilesystemStorageHandler {
    fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let file_path = self.file_path(key)?;
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::WriteFailed(format!("Failed to create directory: {e}"))
            })?;
        }

        fs::write(&file_path, value)
            .map_err(|e| StorageError::WriteFailed(format!("Failed to write file: {e}")))?;
        debug!(path = %file_path.display(), "stored value");
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let file_path = self.file_path(key)?;
        match fs::read(&file_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("Failed to read file: {e}"))),
        }
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let file_path = self.file_path(key)?;
        match fs::remove_file(&file_path) {
            Ok(()) => {
                debug!(path = %file_path.display(), "removed value");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to remove file: {e}"
            ))),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.file_path(key)?.is_file())
    }
}
