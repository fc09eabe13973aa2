//! Event handling.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Terminal event handler.
///
/// The event loop is fully synchronous: one key event is read and handled
/// to completion before the next poll.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    const DEFAULT_POLL_TIMEOUT_MS: u64 = 100;

    /// Creates a new handler with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(Self::DEFAULT_POLL_TIMEOUT_MS),
        }
    }

    /// Polls for the next terminal event.
    ///
    /// # Errors
    /// Returns an IO error if polling fails.
    pub fn poll(&self) -> std::io::Result<Option<Event>> {
        if event::poll(self.poll_timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Checks if a key event is the global quit chord (Ctrl+C).
    ///
    /// Plain characters are never a global quit because the screens own
    /// text inputs.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
