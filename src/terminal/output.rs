//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use std::io::Write;

/// Pre-allocated buffer for building a frame's worth of terminal output.
///
/// Cell writes are accumulated here and flushed in a single `write()` call
/// at the end of the frame to prevent flickering. The buffer also tracks
/// where the terminal cursor will be after the pending output, so writes to
/// adjacent cells skip the cursor move.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
    /// Cursor position (1-based) after the pending output, if known.
    cursor: Option<(u16, u16)>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cursor: None,
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string without touching the tracked cursor.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write the text of one cell at 1-based `(col, row)`.
    ///
    /// The cursor move is omitted when the previous cell write left the
    /// cursor exactly there. Only ASCII symbols are trusted to advance the
    /// cursor by one column; after anything else (possibly a wide glyph) the
    /// next cell moves explicitly.
    pub fn put_cell(&mut self, col: u16, row: u16, text: &str) {
        if self.cursor != Some((col, row)) {
            self.cursor_move(col, row);
        }
        self.data.extend_from_slice(text.as_bytes());
        self.cursor = text.is_ascii().then_some((col.saturating_add(1), row));
    }

    /// Move cursor to 1-based `(col, row)`, using the most compact form.
    #[inline]
    pub fn cursor_move(&mut self, col: u16, row: u16) {
        if row == 1 && col == 1 {
            self.data.extend_from_slice(b"\x1b[H");
        } else if col == 1 {
            let _ = write!(self.data, "\x1b[{row}H");
        } else {
            let _ = write!(self.data, "\x1b[{row};{col}H");
        }
        self.cursor = Some((col, row));
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    ///
    /// The cursor position is forgotten, forcing an explicit move on the
    /// next cell write.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
        self.cursor = None;
    }

    /// Forget the tracked cursor, e.g. after something else wrote to the
    /// terminal.
    pub fn invalidate_cursor(&mut self) {
        self.cursor = None;
    }

    /// Flush to a writer in a single syscall and empty the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        if !self.data.is_empty() {
            writer.write_all(&self.data)?;
            self.data.clear();
        }
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
