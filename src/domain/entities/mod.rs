//! Entity definitions.

mod account;
mod pin;

pub use account::{Account, Accounts};
pub use pin::Pin;
