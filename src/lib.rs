//! Oxiteller - a small ATM demo for the terminal.
//!
//! Users register or log in with a username and a 4-digit PIN, then view
//! their balance, deposit, or withdraw funds. Everything runs in one
//! process against a durable local key-value store; there is no server
//! and no network.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing storage adapters and configuration.
pub mod infrastructure;
/// Presentation layer containing the TUI screens and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "oxiteller";
