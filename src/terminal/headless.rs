//! `HeadlessTerminal`: an in-memory terminal backed by a vt100 emulator.
//!
//! Everything written is parsed exactly as a real terminal would parse it,
//! so tests can assert on what a user would actually see, styling included.
//! Input is scripted with [`HeadlessTerminal::push_event`]. Once an attached
//! terminal's script runs dry, polling fails with `UnexpectedEof` so an event
//! loop driven by it always terminates.

use super::keys::Key;
use super::{TerminalDriver, TerminalEvent};
use std::collections::VecDeque;
use std::fmt::Write as _;
use std::io;
use std::time::Duration;

/// A scripted, emulated terminal.
pub struct HeadlessTerminal {
    parser: vt100::Parser,
    width: u16,
    height: u16,
    attached: bool,
    title: String,
    events: VecDeque<TerminalEvent>,
    scratch: String,
    puts: usize,
    clears: usize,
    flushes: usize,
}

impl HeadlessTerminal {
    /// Create a detached terminal of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            width,
            height,
            attached: false,
            title: String::new(),
            events: VecDeque::new(),
            scratch: String::new(),
            puts: 0,
            clears: 0,
            flushes: 0,
        }
    }

    /// Queue an input event for [`poll_event`](TerminalDriver::poll_event).
    pub fn push_event(&mut self, event: TerminalEvent) {
        self.events.push_back(event);
    }

    /// Queue a key press.
    pub fn push_key(&mut self, key: impl Into<Key>) {
        self.push_event(TerminalEvent::Key(key.into()));
    }

    /// Change the screen size and queue the matching resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.parser.set_size(height, width);
        self.push_event(TerminalEvent::Resize { width, height });
    }

    /// Title set by the last attach.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of cell writes accepted while attached.
    pub const fn put_count(&self) -> usize {
        self.puts
    }

    /// Number of screen clears accepted while attached.
    pub const fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of flushes accepted while attached.
    pub const fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Reset the write, clear and flush counters.
    pub fn reset_counters(&mut self) {
        self.puts = 0;
        self.clears = 0;
        self.flushes = 0;
    }

    /// The visible text of row `y`, one character per column, blanks as
    /// spaces.
    pub fn line(&self, y: u16) -> String {
        let screen = self.parser.screen();
        (0..self.width)
            .map(|x| {
                screen
                    .cell(y, x)
                    .and_then(|cell| cell.contents().chars().next())
                    .unwrap_or(' ')
            })
            .collect()
    }

    /// Every row, as [`line`](Self::line) renders it.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.line(y)).collect()
    }

    /// Whether the cell at 0-based `(x, y)` is shown bold.
    pub fn is_bold(&self, x: u16, y: u16) -> bool {
        self.parser.screen().cell(y, x).is_some_and(vt100::Cell::bold)
    }

    /// Whether the cell at 0-based `(x, y)` is shown in reverse video.
    pub fn is_inverse(&self, x: u16, y: u16) -> bool {
        self.parser.screen().cell(y, x).is_some_and(vt100::Cell::inverse)
    }

    /// Whether the cell at 0-based `(x, y)` is underlined.
    pub fn is_underlined(&self, x: u16, y: u16) -> bool {
        self.parser.screen().cell(y, x).is_some_and(vt100::Cell::underline)
    }
}

impl TerminalDriver for HeadlessTerminal {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn attach(&mut self, title: &str) -> io::Result<()> {
        title.clone_into(&mut self.title);
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) -> io::Result<()> {
        self.attached = false;
        Ok(())
    }

    fn put(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.scratch.clear();
        let _ = write!(self.scratch, "\x1b[{row};{col}H{text}");
        self.parser.process(self.scratch.as_bytes());
        self.puts += 1;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.attached {
            return Ok(());
        }
        self.parser.process(b"\x1b[2J");
        self.clears += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.attached {
            self.flushes += 1;
        }
        Ok(())
    }

    fn poll_event(&mut self, _timeout: Duration) -> io::Result<Option<TerminalEvent>> {
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None if self.attached => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input script exhausted",
            )),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for HeadlessTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessTerminal")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("attached", &self.attached)
            .field("pending_events", &self.events.len())
            .field("puts", &self.puts)
            .field("clears", &self.clears)
            .finish_non_exhaustive()
    }
}
