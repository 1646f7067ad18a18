//! `BufferWrapper`: a pass-through decorator over another buffer.
//!
//! Every operation and property is the parent's. The only thing a wrapper
//! may add is a list of style tags applied around whatever the caller
//! writes, e.g. to highlight a selected row without the row's widget knowing.

use super::cell::Cell;
use super::{Buffer, WrittenBounds};
use crate::error::BufferError;

/// A buffer that forwards everything to its parent.
pub struct BufferWrapper<'a> {
    parent: &'a mut dyn Buffer,
    styles: &'a [&'a str],
}

impl<'a> BufferWrapper<'a> {
    /// Pure delegation.
    pub fn new(parent: &'a mut dyn Buffer) -> Self {
        Self { parent, styles: &[] }
    }

    /// Delegation that wraps every `put`/`write` in `styles`.
    ///
    /// Injected tags open first (outermost), so the caller's own tags still
    /// apply on top of them.
    pub fn with_styles(parent: &'a mut dyn Buffer, styles: &'a [&'a str]) -> Self {
        Self { parent, styles }
    }

    /// The injected tags.
    pub const fn styles(&self) -> &[&str] {
        self.styles
    }
}

fn merge<'s>(injected: &[&'s str], styles: &[&'s str]) -> Vec<&'s str> {
    injected.iter().chain(styles).copied().collect()
}

impl Buffer for BufferWrapper<'_> {
    fn width(&self) -> u16 {
        self.parent.width()
    }

    fn height(&self) -> u16 {
        self.parent.height()
    }

    fn bounds(&self) -> WrittenBounds {
        self.parent.bounds()
    }

    fn clear(&mut self) {
        self.parent.clear();
    }

    fn put(&mut self, x: i32, y: i32, symbol: &str, styles: &[&str]) -> Result<(), BufferError> {
        if self.styles.is_empty() {
            return self.parent.put(x, y, symbol, styles);
        }
        let merged = merge(self.styles, styles);
        self.parent.put(x, y, symbol, &merged)
    }

    fn put_cell(&mut self, x: i32, y: i32, cell: Cell) {
        self.parent.put_cell(x, y, cell);
    }

    fn get(&self, x: i32, y: i32) -> Cell {
        self.parent.get(x, y)
    }

    fn write(&mut self, x: i32, y: i32, text: &str, styles: &[&str]) -> Result<(), BufferError> {
        if self.styles.is_empty() {
            return self.parent.write(x, y, text, styles);
        }
        let merged = merge(self.styles, styles);
        self.parent.write(x, y, text, &merged)
    }

    fn write_buffer(&mut self, x: i32, y: i32, other: &dyn Buffer) {
        self.parent.write_buffer(x, y, other);
    }
}

impl std::fmt::Debug for BufferWrapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferWrapper")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}
