//! Buffer module: layered cell grids that widgets render into.
//!
//! This module contains:
//! - [`Buffer`]: the contract every layer implements
//! - [`RootBuffer`]: the only layer that owns storage
//! - [`BufferView`]: an offset (optionally clipped) window into a parent
//! - [`BufferWrapper`]: a pass-through decorator that can inject styles
//! - [`Cell`]: one visible character plus its resolved styling
//! - [`diff`]: the renderer that turns frames into minimal terminal writes
//!
//! Coordinates are signed: widgets routinely compute positions relative to a
//! region whose exact size they do not track, so writes outside the grid are
//! silently dropped and reads outside it return a blank cell.

mod cell;
mod root;
mod view;
mod wrapper;
pub mod diff;

pub use cell::{Cell, StyleCodes};
pub use diff::{DiffRenderer, DiffResult};
pub use root::{RootBuffer, SharedStyleSheet};
pub use view::{BufferView, ViewOptions};
pub use wrapper::BufferWrapper;

use crate::error::BufferError;
use unicode_segmentation::UnicodeSegmentation;

/// Bounding box of the cells actually written to a buffer.
///
/// Defaults to "nothing written": `min_*` at the buffer's width/height and
/// `max_*` at -1. Layouts read it after a child renders to learn how much of
/// the offered space was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenBounds {
    /// Smallest column written.
    pub min_x: i32,
    /// Smallest row written.
    pub min_y: i32,
    /// Largest column written.
    pub max_x: i32,
    /// Largest row written.
    pub max_y: i32,
}

impl WrittenBounds {
    /// Nothing written yet, for a buffer of the given size.
    pub fn empty(width: u16, height: u16) -> Self {
        Self {
            min_x: i32::from(width),
            min_y: i32::from(height),
            max_x: -1,
            max_y: -1,
        }
    }

    /// Grow the box to include `(x, y)`.
    #[inline]
    pub fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Whether anything was written.
    pub const fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Columns used, measured from the origin (`max_x + 1`, at least 0).
    pub fn used_width(&self) -> u16 {
        u16::try_from((self.max_x + 1).max(0)).unwrap_or(u16::MAX)
    }

    /// Rows used, measured from the origin (`max_y + 1`, at least 0).
    pub fn used_height(&self) -> u16 {
        u16::try_from((self.max_y + 1).max(0)).unwrap_or(u16::MAX)
    }
}

/// A rectangular grid of single-width cells.
///
/// Out-of-bounds access never fails: writes are no-ops and reads return
/// [`Cell::BLANK`].
pub trait Buffer {
    /// Width in columns.
    fn width(&self) -> u16;

    /// Height in rows.
    fn height(&self) -> u16;

    /// Bounding box of the cells written so far.
    fn bounds(&self) -> WrittenBounds;

    /// Reset every addressable cell to a blank space.
    fn clear(&mut self);

    /// Write one visible character styled with `styles`.
    ///
    /// Opening codes are applied in tag order and closed in reverse.
    /// Fails if `symbol` holds more than one visible character once escape
    /// sequences are stripped; out-of-bounds coordinates are ignored.
    fn put(&mut self, x: i32, y: i32, symbol: &str, styles: &[&str]) -> Result<(), BufferError>;

    /// Store an already-resolved cell, e.g. when copying between buffers.
    fn put_cell(&mut self, x: i32, y: i32, cell: Cell);

    /// Read the cell at `(x, y)`, blank if unwritten or out of bounds.
    fn get(&self, x: i32, y: i32) -> Cell;

    /// Write `text` one character at a time, wrapping to column 0 of the next
    /// row at this buffer's right edge. No word-boundary awareness.
    fn write(&mut self, x: i32, y: i32, text: &str, styles: &[&str]) -> Result<(), BufferError> {
        let width = i32::from(self.width());
        let (mut x, mut y) = (x, y);

        for grapheme in text.graphemes(true) {
            if x >= width {
                x = 0;
                y += 1;
            }
            self.put(x, y, grapheme, styles)?;
            x += 1;
        }

        Ok(())
    }

    /// Copy the full `[0, width) x [0, height)` rectangle of `other` into
    /// this buffer at offset `(x, y)`, styling included.
    fn write_buffer(&mut self, x: i32, y: i32, other: &dyn Buffer) {
        for sy in 0..i32::from(other.height()) {
            for sx in 0..i32::from(other.width()) {
                self.put_cell(x + sx, y + sy, other.get(sx, sy));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_empty() {
        let bounds = WrittenBounds::empty(10, 4);
        assert!(bounds.is_empty());
        assert_eq!(bounds.min_x, 10);
        assert_eq!(bounds.min_y, 4);
        assert_eq!(bounds.max_x, -1);
        assert_eq!(bounds.used_width(), 0);
        assert_eq!(bounds.used_height(), 0);
    }

    #[test]
    fn test_bounds_include() {
        let mut bounds = WrittenBounds::empty(10, 4);
        bounds.include(3, 1);
        bounds.include(5, 0);
        assert!(!bounds.is_empty());
        assert_eq!((bounds.min_x, bounds.min_y), (3, 0));
        assert_eq!((bounds.max_x, bounds.max_y), (5, 1));
        assert_eq!(bounds.used_width(), 6);
        assert_eq!(bounds.used_height(), 2);
    }

    #[test]
    fn test_bounds_negative_writes_are_not_empty() {
        let mut bounds = WrittenBounds::empty(10, 4);
        bounds.include(-3, -1);
        assert!(!bounds.is_empty());
        assert_eq!(bounds.used_width(), 0);
    }
}
