//! Transaction use case implementation.

use tracing::{debug, info};

use crate::application::dto::{TransactionKind, TransactionReceipt};
use crate::application::services::{AccountStore, SessionStore, parse_amount};
use crate::domain::errors::TransactionError;

/// Balance display, deposit, and withdrawal for the active session.
///
/// Every operation requires a session; without one it is a silent no-op
/// (`None`). The authenticated screen is unreachable without a session, so
/// the guard exists for defense only.
#[derive(Clone)]
pub struct TransactionUseCase {
    accounts: AccountStore,
    session: SessionStore,
}

impl TransactionUseCase {
    /// Creates a new transaction use case.
    #[must_use]
    pub const fn new(accounts: AccountStore, session: SessionStore) -> Self {
        Self { accounts, session }
    }

    /// Reloads the store and returns the current user's balance.
    #[must_use]
    pub fn show_balance(&self) -> Option<f64> {
        let username = self.session.current_user()?;
        let balance = self.accounts.load().get(&username)?.balance();
        debug!(username = %username, balance, "Balance refreshed");
        Some(balance)
    }

    /// Deposits the validated amount into the current user's account.
    ///
    /// Returns `Ok(None)` when no session exists.
    ///
    /// # Errors
    /// Returns `EmptyAmount` or `InvalidAmount` from validation, or a
    /// storage error when persisting fails.
    pub fn deposit(&self, raw_amount: &str) -> Result<Option<TransactionReceipt>, TransactionError> {
        let Some(username) = self.session.current_user() else {
            return Ok(None);
        };
        let amount = parse_amount(raw_amount)?;

        let mut accounts = self.accounts.load();
        let Some(account) = accounts.get_mut(&username) else {
            return Ok(None);
        };

        account.deposit(amount);
        let new_balance = account.balance();
        self.accounts.save(&accounts)?;

        info!(username = %username, amount, new_balance, "Deposit complete");
        Ok(Some(TransactionReceipt::new(
            TransactionKind::Deposit,
            amount,
            new_balance,
        )))
    }

    /// Withdraws the validated amount from the current user's account.
    ///
    /// Returns `Ok(None)` when no session exists. Withdrawing the exact
    /// balance is allowed and drains it to zero.
    ///
    /// # Errors
    /// Returns `EmptyAmount` or `InvalidAmount` from validation,
    /// `InsufficientFunds` when the amount exceeds the balance, or a
    /// storage error when persisting fails.
    pub fn withdraw(
        &self,
        raw_amount: &str,
    ) -> Result<Option<TransactionReceipt>, TransactionError> {
        let Some(username) = self.session.current_user() else {
            return Ok(None);
        };
        let amount = parse_amount(raw_amount)?;

        let mut accounts = self.accounts.load();
        let Some(account) = accounts.get_mut(&username) else {
            return Ok(None);
        };

        account.withdraw(amount)?;
        let new_balance = account.balance();
        self.accounts.save(&accounts)?;

        info!(username = %username, amount, new_balance, "Withdrawal complete");
        Ok(Some(TransactionReceipt::new(
            TransactionKind::Withdrawal,
            amount,
            new_balance,
        )))
    }
}
