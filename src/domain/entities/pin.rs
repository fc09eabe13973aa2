//! ATM PIN value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-digit PIN with validation and masking.
///
/// PINs are compared as strings, never as numbers, so `"0012"` keeps its
/// leading zeros and stays distinct from any shorter digit sequence.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pin {
    value: String,
}

impl Pin {
    const LENGTH: usize = 4;

    /// Creates a new PIN with format validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.len() != Self::LENGTH {
            return None;
        }

        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self { value })
    }

    /// Creates a PIN without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the PIN digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Compares against a candidate entered by the user, digit for digit.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.value == candidate
    }
}

impl TryFrom<String> for Pin {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "PIN must be exactly 4 digits".to_string())
    }
}

impl From<Pin> for String {
    fn from(pin: Pin) -> Self {
        pin.value
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pin").field("value", &"****").finish()
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "****")
    }
}
