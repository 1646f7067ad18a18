//! Ready-made elements.
//!
//! - [`Label`]: static text, never focusable
//! - [`TextInput`]: single-line editor that hands focus on with Enter
//! - [`StatusBar`]: one-row bar with left, center, and right sections
//!
//! Composites and decorations live in [`crate::element`].

mod label;
mod status_bar;
mod text_input;

pub use label::Label;
pub use status_bar::{StatusBar, StatusBarConfig};
pub use text_input::{TextInput, TextInputConfig};
