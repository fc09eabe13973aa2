//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
///
/// Every variant renders as the short message shown in the auth screen's
/// error slot.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("wrong username or PIN")]
    InvalidCredentials,

    #[error("username and PIN are required")]
    MissingField,

    #[error("PIN must be 4 digits")]
    InvalidPin,

    #[error("username \"{username}\" is already taken")]
    UsernameTaken { username: String },

    #[error("storage error: {0}")]
    Storage(#[from] super::StorageError),
}

impl AuthError {
    /// Creates a taken-username error.
    #[must_use]
    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }

    /// Returns whether the failure is a plain validation error the user
    /// can correct, as opposed to a storage fault.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
