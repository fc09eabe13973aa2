//! Key-value storage port definition.

use crate::domain::errors::StorageError;

/// Port for the durable local key-value store backing accounts and session.
///
/// Values are UTF-8 text blobs, replaced whole on every write. Adapters are
/// free to fail with `StorageError`; callers decide whether a failure is
/// recoverable (reads usually fall back, writes surface in the error slot).
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns an error when the backing medium cannot be read. An absent
    /// key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the backing medium rejects the write.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    /// Returns an error when the backing medium rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Checks whether `key` holds a value.
    ///
    /// # Errors
    /// Returns an error when the backing medium cannot be read.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
