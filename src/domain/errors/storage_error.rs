//! Storage error types.

use thiserror::Error;

/// Failures reported by the durable key-value store and its encoders.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to determine data directory")]
    DataDirNotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}
