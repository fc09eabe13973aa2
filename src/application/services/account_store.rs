//! Persistent account store.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{Account, Accounts, Pin};
use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

/// Fixed key holding the serialized accounts map.
pub const ACCOUNTS_KEY: &str = "atm_demo_accounts";

const DEMO_USERNAME: &str = "demo";
const DEMO_PIN: &str = "1234";
const DEMO_BALANCE: f64 = 1500.0;

/// Whole-map account persistence over the key-value store.
///
/// Every mutation loads the full map, changes one entry, and writes the
/// full map back; last writer wins within the single-threaded event loop.
#[derive(Clone)]
pub struct AccountStore {
    kv: Arc<dyn KeyValueStore>,
}

impl AccountStore {
    /// Creates a store over the given backend.
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Loads the full accounts map.
    ///
    /// An absent, unreadable, or undecodable blob yields an empty map;
    /// corruption is recovered silently apart from a log line.
    #[must_use]
    pub fn load(&self) -> Accounts {
        let raw = match self.kv.get(ACCOUNTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Accounts::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored accounts, starting empty");
                return Accounts::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!(error = %e, "Stored accounts failed to decode, starting empty");
                Accounts::new()
            }
        }
    }

    /// Serializes and persists the full accounts map.
    ///
    /// # Errors
    /// Returns an error when encoding or the backend write fails.
    pub fn save(&self, accounts: &Accounts) -> Result<(), StorageError> {
        let raw = serde_json::to_string(accounts)?;
        self.kv.put(ACCOUNTS_KEY, &raw)
    }

    /// Seeds the demo account once. Never overwrites an existing one.
    ///
    /// # Errors
    /// Returns an error when persisting the seeded map fails.
    pub fn ensure_seed_account(&self) -> Result<(), StorageError> {
        let mut accounts = self.load();
        if accounts.contains_key(DEMO_USERNAME) {
            return Ok(());
        }

        debug!(username = DEMO_USERNAME, "Seeding demo account");
        accounts.insert(
            DEMO_USERNAME.to_string(),
            Account::new(Pin::new_unchecked(DEMO_PIN), DEMO_BALANCE),
        );
        self.save(&accounts)
    }
}
