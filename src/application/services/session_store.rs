//! Persistent session state.

use std::sync::Arc;

use tracing::warn;

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

/// Fixed key holding the current session username.
pub const SESSION_KEY: &str = "atm_demo_current_user";

/// At most one authenticated username, persisted across restarts.
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Creates a session store over the given backend.
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Returns the persisted session username, if any.
    ///
    /// Read failures degrade to "logged out" rather than erroring.
    #[must_use]
    pub fn current_user(&self) -> Option<String> {
        match self.kv.get(SESSION_KEY) {
            Ok(value) => value.filter(|name| !name.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read session, treating as logged out");
                None
            }
        }
    }

    /// Persists the given username, or clears the session when `None`.
    ///
    /// # Errors
    /// Returns an error when the backend write fails.
    pub fn set_current_user(&self, username: Option<&str>) -> Result<(), StorageError> {
        match username {
            Some(name) => self.kv.put(SESSION_KEY, name),
            None => self.kv.remove(SESSION_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryKeyValueStore;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn test_empty_store_means_logged_out() {
        assert!(store().current_user().is_none());
    }

    #[test]
    fn test_set_and_read_back() {
        let store = store();
        store.set_current_user(Some("alice")).unwrap();

        assert_eq!(store.current_user().as_deref(), Some("alice"));
    }

    #[test]
    fn test_clearing_removes_the_entry() {
        let store = store();
        store.set_current_user(Some("alice")).unwrap();
        store.set_current_user(None).unwrap();

        assert!(store.current_user().is_none());
        assert!(!store.kv.contains(SESSION_KEY).unwrap());
    }
}
