//! Infrastructure layer with storage adapters and configuration.

/// Application configuration.
pub mod config;
/// Key-value store adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
