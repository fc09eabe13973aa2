//! Use case implementations.

mod login_use_case;
mod register_use_case;
mod restore_session_use_case;
mod transaction_use_case;

pub use login_use_case::LoginUseCase;
pub use register_use_case::RegisterUseCase;
pub use restore_session_use_case::RestoreSessionUseCase;
pub use transaction_use_case::TransactionUseCase;
