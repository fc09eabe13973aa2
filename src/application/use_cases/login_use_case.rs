//! Login use case implementation.

use tracing::{debug, info, warn};

use crate::application::dto::{AuthResponse, LoginRequest};
use crate::application::services::{AccountStore, SessionStore};
use crate::domain::errors::AuthError;

/// Handles credential checks and session lifecycle.
#[derive(Clone)]
pub struct LoginUseCase {
    accounts: AccountStore,
    session: SessionStore,
}

impl LoginUseCase {
    /// Creates a new login use case.
    #[must_use]
    pub const fn new(accounts: AccountStore, session: SessionStore) -> Self {
        Self { accounts, session }
    }

    /// Executes login with the provided form data.
    ///
    /// Both fields are trimmed; the PIN is compared by exact string
    /// equality. An unknown username and a wrong PIN are indistinguishable
    /// to the caller.
    ///
    /// # Errors
    /// Returns `InvalidCredentials` on any mismatch, or a storage error
    /// when persisting the session fails.
    pub fn execute(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let username = request.username.trim();
        let pin = request.pin.trim();

        debug!(username, "Attempting login");

        let accounts = self.accounts.load();
        let account = accounts.get(username).ok_or_else(|| {
            warn!(username, "Login failed, unknown username");
            AuthError::InvalidCredentials
        })?;

        if !account.pin().matches(pin) {
            warn!(username, "Login failed, PIN mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        self.session.set_current_user(Some(username))?;
        info!(username, "Login successful");

        Ok(AuthResponse::new(username.to_string(), account.balance()))
    }

    /// Clears the session. Stored balances are untouched.
    ///
    /// # Errors
    /// Returns a storage error when clearing the persisted session fails.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.set_current_user(None)?;
        info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::storage::MemoryKeyValueStore;

    fn use_case() -> LoginUseCase {
        let kv: Arc<MemoryKeyValueStore> = Arc::new(MemoryKeyValueStore::new());
        let accounts = AccountStore::new(kv.clone());
        accounts.ensure_seed_account().unwrap();
        LoginUseCase::new(accounts, SessionStore::new(kv))
    }

    #[test]
    fn test_successful_login_sets_session() {
        let use_case = use_case();

        let response = use_case
            .execute(LoginRequest::new("demo".into(), "1234".into()))
            .unwrap();

        assert_eq!(response.username, "demo");
        assert_eq!(response.balance, 1500.0);
        assert_eq!(use_case.session.current_user().as_deref(), Some("demo"));
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let use_case = use_case();

        let response = use_case
            .execute(LoginRequest::new("  demo ".into(), " 1234 ".into()))
            .unwrap();

        assert_eq!(response.username, "demo");
    }

    #[test]
    fn test_wrong_pin_fails_without_session() {
        let use_case = use_case();

        let result = use_case.execute(LoginRequest::new("demo".into(), "4321".into()));

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(use_case.session.current_user().is_none());
    }

    #[test]
    fn test_unknown_username_fails() {
        let use_case = use_case();

        let result = use_case.execute(LoginRequest::new("nobody".into(), "1234".into()));

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_short_pin_never_matches_padded_pin() {
        // Stored "1234" must not match a numerically equal candidate.
        let use_case = use_case();

        let result = use_case.execute(LoginRequest::new("demo".into(), "01234".into()));

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_logout_clears_session_only() {
        let use_case = use_case();
        use_case
            .execute(LoginRequest::new("demo".into(), "1234".into()))
            .unwrap();

        use_case.logout().unwrap();

        assert!(use_case.session.current_user().is_none());
        assert_eq!(use_case.accounts.load().get("demo").unwrap().balance(), 1500.0);
    }
}
