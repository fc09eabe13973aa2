//! UI screens.

mod app;
mod atm_screen;
mod auth_screen;

pub use app::App;
pub use atm_screen::{AtmAction, AtmScreen};
pub use auth_screen::{AuthAction, AuthScreen, AuthTab};
