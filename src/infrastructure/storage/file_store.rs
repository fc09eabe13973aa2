//! File-backed key-value store.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

/// Durable key-value store keeping one file per key under a data directory.
///
/// Writes go through a temp file and an atomic rename, so a crash mid-write
/// leaves the previous value intact. Keys are the fixed identifiers used by
/// the stores and are filename-safe by construction.
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            info!(dir = %dir.display(), "Creating data directory");
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        let mut temp_file = tempfile::NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.persist(&path).map_err(|e| e.error)?;

        debug!(key, "Persisted value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
