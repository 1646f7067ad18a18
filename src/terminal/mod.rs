//! Terminal module: the device the diff renderer writes to.
//!
//! [`TerminalDriver`] is the seam between the element tree and a real
//! screen. Two drivers ship with the crate:
//! - [`CrosstermDriver`]: raw mode, alternate screen, and a dedicated input
//!   thread feeding events over a channel
//! - [`HeadlessTerminal`]: an in-memory vt100 screen for tests and
//!   recording, with scripted input

mod backend;
mod headless;
mod input;
mod keys;
mod output;

pub use backend::{CrosstermDriver, DriverConfig};
pub use headless::HeadlessTerminal;
pub use input::InputActor;
pub use keys::{FocusKeys, Key, KeyCode, KeyModifiers};
pub use output::OutputBuffer;

use std::io;
use std::time::Duration;

/// Events read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(Key),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// The terminal window gained focus.
    FocusGained,

    /// The terminal window lost focus.
    FocusLost,

    /// The input source failed; the event loop keeps running.
    Error(String),
}

/// A character-cell output device plus its input source.
///
/// Cell coordinates passed to [`put`](Self::put) are 1-based, matching
/// terminal cursor addressing. While detached every output operation is a
/// silent no-op.
pub trait TerminalDriver {
    /// Current size as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Whether the driver currently owns the screen.
    fn is_attached(&self) -> bool;

    /// Take over the screen and set the window title.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    fn attach(&mut self, title: &str) -> io::Result<()>;

    /// Restore the terminal. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if restoring the terminal fails.
    fn detach(&mut self) -> io::Result<()>;

    /// Write one cell's text (escape sequences included) at 1-based
    /// `(col, row)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the device rejects the write.
    fn put(&mut self, col: u16, row: u16, text: &str) -> io::Result<()>;

    /// Blank the whole screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the device rejects the write.
    fn clear(&mut self) -> io::Result<()>;

    /// Push pending output to the device.
    ///
    /// # Errors
    ///
    /// Returns an error if the device rejects the write.
    fn flush(&mut self) -> io::Result<()>;

    /// Wait up to `timeout` for the next input event.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source is gone for good.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<TerminalEvent>>;
}
