//! # Trellis
//!
//! A retained-mode terminal UI toolkit with a proper focus protocol.
//!
//! Trellis renders a tree of elements into layered cell buffers and diffs
//! each frame against the previous one, so a keystroke that changes one
//! character costs one cursor move and one write.
//!
//! ## Core Concepts
//!
//! - **Layered buffers**: one [`RootBuffer`] owns the cells; views and
//!   wrappers window into it without copying
//! - **Cell diffing**: only cells whose symbol or styling changed reach the
//!   terminal
//! - **Focus protocol**: composites track which child holds focus and move it
//!   in response to [`Signal`]s emitted by their children
//! - **Locked subtrees**: focus wraps inside a locked composite instead of
//!   escaping to its parent
//!
//! ## Example
//!
//! ```rust,no_run
//! use trellis::element::{Border, MultiWrapper, Wrapper};
//! use trellis::widget::TextInput;
//! use trellis::{Application, Command, Key};
//!
//! # fn main() -> trellis::AppResult<()> {
//! let form = MultiWrapper::new(vec![
//!     Box::new(Wrapper::decorated(TextInput::new(), Border::titled("Name"))),
//!     Box::new(Wrapper::decorated(TextInput::new(), Border::titled("Email"))),
//! ]);
//!
//! let mut app = Application::new(trellis::terminal::CrosstermDriver::default());
//! app.add_view("form", form)?;
//! app.bind(Key::ctrl('c'), Command::Quit);
//! app.run()
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod buffer;
pub mod element;
pub mod error;
pub mod layout;
pub mod style;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use app::{AppConfig, Application, Command};
pub use buffer::{Buffer, BufferView, BufferWrapper, Cell, RootBuffer, ViewOptions};
pub use element::{Element, FocusState, MultiWrapper, Signal, Signals, Wrapper};
pub use error::{AppError, AppResult, BufferError, FocusError};
pub use layout::Rect;
pub use style::{AnsiStyles, StyleSheet};
pub use terminal::{Key, KeyCode, KeyModifiers, TerminalDriver, TerminalEvent};
