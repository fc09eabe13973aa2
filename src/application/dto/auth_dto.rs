//! Authentication DTOs.

use crate::application::services::format_amount;

/// Login form data, exactly as entered.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Username field value.
    pub username: String,
    /// PIN field value.
    pub pin: String,
}

impl LoginRequest {
    /// Creates a new login request.
    #[must_use]
    pub const fn new(username: String, pin: String) -> Self {
        Self { username, pin }
    }
}

/// Registration form data, exactly as entered.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Username field value.
    pub username: String,
    /// PIN field value.
    pub pin: String,
    /// Starting balance field value; empty means zero.
    pub starting_balance: String,
}

impl RegisterRequest {
    /// Creates a new registration request.
    #[must_use]
    pub const fn new(username: String, pin: String, starting_balance: String) -> Self {
        Self {
            username,
            pin,
            starting_balance,
        }
    }
}

/// Authenticated session summary returned by the auth flows.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    /// Username of the authenticated account.
    pub username: String,
    /// Balance at the time of authentication.
    pub balance: f64,
}

impl AuthResponse {
    /// Creates a new auth response.
    #[must_use]
    pub const fn new(username: String, balance: f64) -> Self {
        Self { username, balance }
    }

    /// Returns the balance formatted to two decimal places.
    #[must_use]
    pub fn formatted_balance(&self) -> String {
        format_amount(self.balance)
    }
}
