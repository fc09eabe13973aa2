//! In-memory key-value store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

/// Volatile key-value store backed by a map.
///
/// Used as the test double for the file adapter and for clean-slate demo
/// runs; it satisfies the same port but never touches the filesystem.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
