//! `BufferView`: a rectangular window into a parent buffer.
//!
//! Reads and writes are forwarded at an offset. A view has its own size,
//! independent of the space remaining in the parent, and keeps a running
//! bounding box of what was written through it so layouts can shrink to fit
//! a child after it renders.

use super::cell::Cell;
use super::{Buffer, WrittenBounds};
use crate::error::BufferError;
use crate::layout::Rect;

/// Placement of a [`BufferView`] inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Column offset in the parent.
    pub x: i32,
    /// Row offset in the parent.
    pub y: i32,
    /// Explicit width; `None` takes the space remaining right of `x`.
    pub width: Option<u16>,
    /// Explicit height; `None` takes the space remaining below `y`.
    pub height: Option<u16>,
    /// Whether writes outside the view still reach the parent.
    pub overflow: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: None,
            height: None,
            overflow: true,
        }
    }
}

impl ViewOptions {
    /// Offset `(x, y)`, remaining size, overflow allowed.
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
            overflow: true,
        }
    }

    /// Set an explicit size.
    #[must_use]
    pub const fn sized(mut self, width: u16, height: u16) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Drop writes that fall outside the view.
    #[must_use]
    pub const fn clipped(mut self) -> Self {
        self.overflow = false;
        self
    }
}

impl From<Rect> for ViewOptions {
    fn from(rect: Rect) -> Self {
        Self::at(i32::from(rect.x), i32::from(rect.y)).sized(rect.width, rect.height)
    }
}

/// A view into a parent buffer at a fixed offset.
pub struct BufferView<'a> {
    parent: &'a mut dyn Buffer,
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    overflow: bool,
    bounds: WrittenBounds,
}

impl<'a> BufferView<'a> {
    /// A view covering the whole parent, overflow allowed.
    pub fn new(parent: &'a mut dyn Buffer) -> Self {
        Self::with_options(parent, ViewOptions::default())
    }

    /// A view placed according to `options`.
    pub fn with_options(parent: &'a mut dyn Buffer, options: ViewOptions) -> Self {
        let width = options
            .width
            .unwrap_or_else(|| remaining(parent.width(), options.x));
        let height = options
            .height
            .unwrap_or_else(|| remaining(parent.height(), options.y));

        Self {
            parent,
            x: options.x,
            y: options.y,
            width,
            height,
            overflow: options.overflow,
            bounds: WrittenBounds::empty(width, height),
        }
    }

    /// A clipped view exactly covering `rect`.
    pub fn from_rect(parent: &'a mut dyn Buffer, rect: Rect) -> Self {
        Self::with_options(parent, ViewOptions::from(rect).clipped())
    }

    #[inline]
    fn accepts(&self, x: i32, y: i32) -> bool {
        self.overflow
            || (x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height))
    }
}

/// Space left in a parent dimension of `size` after `offset`.
fn remaining(size: u16, offset: i32) -> u16 {
    u16::try_from((i32::from(size) - offset).max(0)).unwrap_or(u16::MAX)
}

impl Buffer for BufferView<'_> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn bounds(&self) -> WrittenBounds {
        self.bounds
    }

    fn clear(&mut self) {
        for y in 0..i32::from(self.height) {
            for x in 0..i32::from(self.width) {
                self.put_cell(x, y, Cell::BLANK);
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, symbol: &str, styles: &[&str]) -> Result<(), BufferError> {
        if !self.accepts(x, y) {
            return Ok(());
        }
        self.parent.put(self.x + x, self.y + y, symbol, styles)?;
        self.bounds.include(x, y);
        Ok(())
    }

    fn put_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.accepts(x, y) {
            return;
        }
        self.parent.put_cell(self.x + x, self.y + y, cell);
        self.bounds.include(x, y);
    }

    fn get(&self, x: i32, y: i32) -> Cell {
        self.parent.get(self.x + x, self.y + y)
    }
}

impl std::fmt::Debug for BufferView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferView")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("overflow", &self.overflow)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
