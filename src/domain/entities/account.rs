//! Account record and the persisted accounts map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Pin;
use crate::domain::errors::TransactionError;

/// All known accounts keyed by username, persisted as one JSON object.
pub type Accounts = BTreeMap<String, Account>;

/// A single ATM account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pin: Pin,
    balance: f64,
}

impl Account {
    /// Creates an account, clamping a negative opening balance to zero.
    #[must_use]
    pub fn new(pin: Pin, opening_balance: f64) -> Self {
        Self {
            pin,
            balance: opening_balance.max(0.0),
        }
    }

    /// Returns the account PIN.
    #[must_use]
    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    /// Returns the current balance.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds funds. Deposits have no upper bound.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Removes funds. Withdrawing the full balance drains it to zero.
    ///
    /// # Errors
    /// Returns `InsufficientFunds` when `amount` exceeds the balance,
    /// leaving the balance unchanged.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), TransactionError> {
        if amount > self.balance {
            return Err(TransactionError::insufficient_funds(amount, self.balance));
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_account(balance: f64) -> Account {
        Account::new(Pin::new("1234").unwrap(), balance)
    }

    #[test]
    fn test_negative_opening_balance_clamps_to_zero() {
        let account = demo_account(-25.0);
        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_deposit_adds_exactly() {
        let mut account = demo_account(1500.0);
        account.deposit(50.0);

        assert_eq!(account.balance(), 1550.0);
    }

    #[test]
    fn test_withdraw_subtracts_exactly() {
        let mut account = demo_account(100.0);
        account.withdraw(40.0).unwrap();

        assert_eq!(account.balance(), 60.0);
    }

    #[test]
    fn test_withdraw_full_balance_drains_to_zero() {
        let mut account = demo_account(100.0);
        account.withdraw(100.0).unwrap();

        assert_eq!(account.balance(), 0.0);
    }

    #[test]
    fn test_overdraw_fails_and_leaves_balance_unchanged() {
        let mut account = demo_account(100.0);
        let result = account.withdraw(150.0);

        assert!(matches!(
            result,
            Err(TransactionError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_persisted_json_shape() {
        let account = demo_account(1500.0);
        let encoded = serde_json::to_string(&account).unwrap();

        assert_eq!(encoded, r#"{"pin":"1234","balance":1500.0}"#);
    }
}
