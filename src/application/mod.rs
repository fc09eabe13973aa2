//! Application layer with use cases, services, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Store-facing services and shared validation.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthResponse, LoginRequest, RegisterRequest, TransactionReceipt};
pub use services::{AccountStore, SessionStore};
pub use use_cases::{LoginUseCase, RegisterUseCase, RestoreSessionUseCase, TransactionUseCase};
