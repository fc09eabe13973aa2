//! Session restoration use case.

use tracing::{debug, info, warn};

use crate::application::dto::AuthResponse;
use crate::application::services::{AccountStore, SessionStore};

/// Restores the persisted session at startup.
pub struct RestoreSessionUseCase {
    accounts: AccountStore,
    session: SessionStore,
}

impl RestoreSessionUseCase {
    /// Creates a new restore use case.
    #[must_use]
    pub const fn new(accounts: AccountStore, session: SessionStore) -> Self {
        Self { accounts, session }
    }

    /// Returns the restored session, or `None` when no valid one exists.
    ///
    /// A session naming an account that is no longer in the store is
    /// dangling; it is cleared and treated as logged out.
    #[must_use]
    pub fn execute(&self) -> Option<AuthResponse> {
        let username = self.session.current_user()?;

        let accounts = self.accounts.load();
        match accounts.get(&username) {
            Some(account) => {
                info!(username = %username, "Restored session");
                Some(AuthResponse::new(username, account.balance()))
            }
            None => {
                warn!(username = %username, "Session names a missing account, logging out");
                if let Err(e) = self.session.set_current_user(None) {
                    debug!(error = %e, "Failed to clear dangling session");
                }
                None
            }
        }
    }
}
