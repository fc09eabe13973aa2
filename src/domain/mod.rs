//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Account, Accounts, Pin};
pub use errors::{AuthError, StorageError, TransactionError};
pub use ports::KeyValueStore;
