//! Store-facing services and shared validation.

mod account_store;
mod amounts;
mod session_store;

pub use account_store::{ACCOUNTS_KEY, AccountStore};
pub use amounts::{format_amount, parse_amount};
pub use session_store::{SESSION_KEY, SessionStore};
