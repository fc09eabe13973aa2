//! Registration use case implementation.

use tracing::{debug, info, warn};

use crate::application::dto::{AuthResponse, RegisterRequest};
use crate::application::services::{AccountStore, SessionStore};
use crate::domain::entities::{Account, Pin};
use crate::domain::errors::AuthError;

/// Handles account creation with auto-login.
#[derive(Clone)]
pub struct RegisterUseCase {
    accounts: AccountStore,
    session: SessionStore,
}

impl RegisterUseCase {
    /// Creates a new registration use case.
    #[must_use]
    pub const fn new(accounts: AccountStore, session: SessionStore) -> Self {
        Self { accounts, session }
    }

    /// Executes registration with the provided form data.
    ///
    /// Username and PIN are trimmed. The starting balance is optional:
    /// empty or unparseable input means zero and negative values clamp
    /// to zero. On success the new account is persisted and becomes the
    /// active session.
    ///
    /// # Errors
    /// Returns `MissingField`, `InvalidPin`, or `UsernameTaken` on
    /// validation failures, or a storage error when persisting fails.
    pub fn execute(&self, request: RegisterRequest) -> Result<AuthResponse, AuthError> {
        let username = request.username.trim();
        let pin = request.pin.trim();

        debug!(username, "Attempting registration");

        if username.is_empty() || pin.is_empty() {
            return Err(AuthError::MissingField);
        }

        let pin = Pin::new(pin).ok_or(AuthError::InvalidPin)?;

        let mut accounts = self.accounts.load();
        if accounts.contains_key(username) {
            warn!(username, "Registration failed, username taken");
            return Err(AuthError::username_taken(username));
        }

        let account = Account::new(pin, parse_starting_balance(&request.starting_balance));
        let balance = account.balance();
        accounts.insert(username.to_string(), account);

        self.accounts.save(&accounts)?;
        self.session.set_current_user(Some(username))?;
        info!(username, balance, "Registered new account");

        Ok(AuthResponse::new(username.to_string(), balance))
    }
}

/// Empty or unparseable opening balances default to zero.
fn parse_starting_balance(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|balance| balance.is_finite())
        .map_or(0.0, |balance| balance.max(0.0))
}
