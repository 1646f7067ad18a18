//! Element module: the widget tree and its focus protocol.
//!
//! This module contains:
//! - [`Element`]: the trait every node implements
//! - [`Wrapper`]: a single-child pass-through with optional [`Decoration`]
//! - [`MultiWrapper`]: a composite that coordinates focus among children
//! - [`Signals`]: the outbox through which children talk to their parent
//!
//! # Focus
//!
//! Exactly one leaf receives key input. Every ancestor on the way there
//! reports [`FocusState::FocusedDescendant`] with the index of the next hop,
//! so the chain can be walked from the root without parent pointers.
//! Children request focus changes by emitting [`Signal`]s; the parent reacts
//! after the child's call returns.

mod multi;
mod signal;
mod traits;
mod wrapper;

pub use multi::{Arrange, MultiWrapper, Row, Stack};
pub use signal::{Signal, Signals};
pub use traits::{focus_path, Element, ElementBase, FocusState};
pub use wrapper::{Border, Decoration, Inset, Plain, Wrapper};
