//! Transaction error types.

use thiserror::Error;

/// Transaction error variants.
///
/// Every variant renders as the short message shown in the ATM screen's
/// error slot.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum TransactionError {
    #[error("please enter an amount first")]
    EmptyAmount,

    #[error("amount must be a positive number")]
    InvalidAmount,

    #[error("insufficient balance")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("storage error: {0}")]
    Storage(#[from] super::StorageError),
}

impl TransactionError {
    /// Creates an insufficient-funds error.
    #[must_use]
    pub const fn insufficient_funds(requested: f64, available: f64) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }
}
