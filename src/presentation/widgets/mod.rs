//! Reusable widgets.

mod input;

pub use input::{InputFilter, TextInput};
