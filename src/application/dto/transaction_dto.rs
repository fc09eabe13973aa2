//! Transaction DTOs.

use crate::application::services::format_amount;

/// Currency suffix used in confirmation messages.
const CURRENCY: &str = "SEK";

/// Kind of balance mutation a receipt describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Funds added to the balance.
    Deposit,
    /// Funds removed from the balance.
    Withdrawal,
}

/// Outcome of a successful deposit or withdrawal.
#[derive(Debug, Clone)]
pub struct TransactionReceipt {
    /// What happened.
    pub kind: TransactionKind,
    /// The validated amount that was applied.
    pub amount: f64,
    /// Balance after the mutation was persisted.
    pub new_balance: f64,
}

impl TransactionReceipt {
    /// Creates a new receipt.
    #[must_use]
    pub const fn new(kind: TransactionKind, amount: f64, new_balance: f64) -> Self {
        Self {
            kind,
            amount,
            new_balance,
        }
    }

    /// Returns the confirmation message for the success slot.
    #[must_use]
    pub fn message(&self) -> String {
        let amount = format_amount(self.amount);
        match self.kind {
            TransactionKind::Deposit => format!("Deposited {amount} {CURRENCY}."),
            TransactionKind::Withdrawal => format!("Withdrew {amount} {CURRENCY}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_message_formats_two_decimals() {
        let receipt = TransactionReceipt::new(TransactionKind::Deposit, 50.0, 1550.0);
        assert_eq!(receipt.message(), "Deposited 50.00 SEK.");
    }

    #[test]
    fn test_withdrawal_message_formats_two_decimals() {
        let receipt = TransactionReceipt::new(TransactionKind::Withdrawal, 25.5, 74.5);
        assert_eq!(receipt.message(), "Withdrew 25.50 SEK.");
    }
}
