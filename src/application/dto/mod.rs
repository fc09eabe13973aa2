//! Data transfer objects.

mod auth_dto;
mod transaction_dto;

pub use auth_dto::{AuthResponse, LoginRequest, RegisterRequest};
pub use transaction_dto::{TransactionKind, TransactionReceipt};
