//! `RootBuffer`: the buffer that owns real storage.
//!
//! Cells are stored column-major: a `width`-length vector of `height`-length
//! columns. Resizing adds or drops whole columns (width) or the tail of every
//! column (height), so cells that stay in range are never moved or touched.

use super::cell::{Cell, StyleCodes};
use super::{Buffer, WrittenBounds};
use crate::error::BufferError;
use crate::style::{self, AnsiStyles, StyleSheet};
use std::sync::Arc;

/// Shared handle to a style sheet.
pub type SharedStyleSheet = Arc<dyn StyleSheet + Send + Sync>;

/// A top-level buffer that stores cells and guards against out-of-bounds
/// access.
#[derive(Clone)]
pub struct RootBuffer {
    /// Column-major cell storage.
    columns: Vec<Vec<Cell>>,
    /// Rows per column. Kept separately so a zero-width buffer remembers it.
    height: u16,
    /// Bounding box of successful writes.
    bounds: WrittenBounds,
    /// Resolves style tags on `put`.
    stylesheet: SharedStyleSheet,
    /// Tags and codes of the last styled `put`, reused by runs of the same style.
    last_style: Option<(Vec<String>, Option<Arc<StyleCodes>>)>,
}

impl RootBuffer {
    /// Create a blank buffer styled with [`AnsiStyles`].
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_stylesheet(width, height, Arc::new(AnsiStyles))
    }

    /// Create a blank buffer with a custom style sheet.
    pub fn with_stylesheet(width: u16, height: u16, stylesheet: SharedStyleSheet) -> Self {
        Self {
            columns: vec![vec![Cell::BLANK; height as usize]; width as usize],
            height,
            bounds: WrittenBounds::empty(width, height),
            stylesheet,
            last_style: None,
        }
    }

    /// Change the width, keeping every column that stays in range.
    pub fn set_width(&mut self, width: u16) {
        let width = width as usize;
        if self.columns.len() > width {
            self.columns.truncate(width);
        } else {
            let height = self.height as usize;
            self.columns.resize_with(width, || vec![Cell::BLANK; height]);
        }
        self.reset_empty_bounds();
    }

    /// Change the height of every column, keeping rows that stay in range.
    pub fn set_height(&mut self, height: u16) {
        for column in &mut self.columns {
            column.resize(height as usize, Cell::BLANK);
        }
        self.height = height;
        self.reset_empty_bounds();
    }

    /// Resize both dimensions, preserving content where possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width() && height == self.height {
            return;
        }
        self.set_width(width);
        self.set_height(height);
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len() * self.height as usize
    }

    /// Whether the buffer has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the cell at `(x, y)` without cloning.
    #[inline]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.columns.get(x as usize)?.get(y as usize)
    }

    /// Overwrite an in-range cell, returning `false` when out of bounds.
    ///
    /// Unlike [`Buffer::put_cell`] this leaves the written bounds alone; the
    /// diff renderer uses it to mirror the terminal.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.columns.get_mut(x as usize).and_then(|c| c.get_mut(y as usize)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Render the symbols row by row, without styling. Handy in tests and logs.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                self.columns
                    .iter()
                    .map(|column| column[y as usize].symbol())
                    .collect()
            })
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.columns.len() && y < self.height as usize).then_some((x, y))
    }

    fn resolve_styles(&mut self, styles: &[&str]) -> Option<Arc<StyleCodes>> {
        if styles.is_empty() {
            return None;
        }
        if let Some((tags, codes)) = &self.last_style {
            if tags.iter().map(String::as_str).eq(styles.iter().copied()) {
                return codes.clone();
            }
        }

        let codes = StyleCodes::resolve(self.stylesheet.as_ref(), styles).map(Arc::new);
        let tags = styles.iter().map(|tag| (*tag).to_string()).collect();
        self.last_style = Some((tags, codes.clone()));
        codes
    }

    fn reset_empty_bounds(&mut self) {
        if self.bounds.is_empty() {
            self.bounds = WrittenBounds::empty(self.width(), self.height);
        }
    }
}

impl Buffer for RootBuffer {
    #[inline]
    fn width(&self) -> u16 {
        u16::try_from(self.columns.len()).unwrap_or(u16::MAX)
    }

    #[inline]
    fn height(&self) -> u16 {
        self.height
    }

    fn bounds(&self) -> WrittenBounds {
        self.bounds
    }

    /// Writes a blank into every cell in place; storage is not reallocated
    /// and the written bounds are left as they were.
    fn clear(&mut self) {
        for column in &mut self.columns {
            column.fill(Cell::BLANK);
        }
    }

    fn put(&mut self, x: i32, y: i32, symbol: &str, styles: &[&str]) -> Result<(), BufferError> {
        let visible = style::visible_len(symbol);
        if visible > 1 {
            return Err(BufferError::InvalidCharacter {
                symbol: symbol.to_string(),
                visible,
            });
        }

        let Some((cx, cy)) = self.index(x, y) else {
            return Ok(());
        };

        let style = self.resolve_styles(styles);
        self.columns[cx][cy] = Cell::new(&style::strip_escapes(symbol)).with_style(style);
        self.bounds.include(x, y);
        Ok(())
    }

    fn put_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some((cx, cy)) = self.index(x, y) {
            self.columns[cx][cy] = cell;
            self.bounds.include(x, y);
        }
    }

    fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y)
            .map_or(Cell::BLANK, |(cx, cy)| self.columns[cx][cy].clone())
    }
}

impl std::fmt::Debug for RootBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootBuffer")
            .field("width", &self.width())
            .field("height", &self.height)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let buffer = RootBuffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
        assert!(buffer.bounds().is_empty());
    }

    #[test]
    fn test_zero_width_remembers_height() {
        let mut buffer = RootBuffer::new(0, 5);
        assert!(buffer.is_empty());
        buffer.set_width(3);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.len(), 15);
    }

    #[test]
    fn test_put_get_round_trip() {
        let mut buffer = RootBuffer::new(10, 5);
        buffer.put(3, 2, "x", &[]).unwrap();
        assert_eq!(buffer.get(3, 2).symbol(), "x");
        assert_eq!(buffer.get(2, 3).symbol(), " ");
    }

    #[test]
    fn test_out_of_bounds_is_silent() {
        let mut buffer = RootBuffer::new(10, 5);
        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 5), (100, 100)] {
            buffer.put(x, y, "x", &[]).unwrap();
            assert!(buffer.get(x, y).is_blank());
        }
        assert!(buffer.bounds().is_empty());
        assert!(buffer.to_lines().iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_put_rejects_multiple_characters() {
        let mut buffer = RootBuffer::new(10, 5);
        let err = buffer.put(0, 0, "ab", &[]).unwrap_err();
        assert_eq!(
            err,
            BufferError::InvalidCharacter {
                symbol: "ab".to_string(),
                visible: 2
            }
        );
        // Rejected even when the position is out of bounds.
        assert!(buffer.put(50, 50, "ab", &[]).is_err());
    }

    #[test]
    fn test_put_strips_embedded_escapes() {
        let mut buffer = RootBuffer::new(10, 5);
        buffer.put(0, 0, "\x1b[31mx\x1b[39m", &[]).unwrap();
        assert_eq!(buffer.get(0, 0).symbol(), "x");
    }

    #[test]
    fn test_put_with_styles() {
        let mut buffer = RootBuffer::new(10, 5);
        buffer.put(1, 1, "x", &["bold", "red"]).unwrap();
        let cell = buffer.get(1, 1);
        assert_eq!(cell.to_string(), "\x1b[1m\x1b[31mx\x1b[39m\x1b[22m");

        buffer.put(2, 1, "y", &["nonsense"]).unwrap();
        assert_eq!(buffer.get(2, 1), Cell::new("y"));
    }

    #[test]
    fn test_style_cache_tracks_tag_changes() {
        let mut buffer = RootBuffer::new(10, 1);
        buffer.put(0, 0, "a", &["bold"]).unwrap();
        buffer.put(1, 0, "b", &["bold"]).unwrap();
        buffer.put(2, 0, "c", &["italic"]).unwrap();
        assert_eq!(buffer.get(0, 0).style(), buffer.get(1, 0).style());
        assert_ne!(buffer.get(1, 0).style(), buffer.get(2, 0).style());
    }

    #[test]
    fn test_write_wraps_at_right_edge() {
        let mut buffer = RootBuffer::new(4, 3);
        buffer.write(2, 0, "abcd", &[]).unwrap();
        assert_eq!(buffer.to_lines(), vec!["  ab", "cd  ", "    "]);
    }

    #[test]
    fn test_write_full_row_does_not_wrap() {
        let mut buffer = RootBuffer::new(4, 2);
        buffer.write(0, 0, "abcd", &[]).unwrap();
        assert_eq!(buffer.to_lines(), vec!["abcd", "    "]);
        assert_eq!(buffer.bounds().max_y, 0);
    }

    #[test]
    fn test_bounds_track_writes() {
        let mut buffer = RootBuffer::new(10, 5);
        buffer.write(2, 1, "hey", &[]).unwrap();
        let bounds = buffer.bounds();
        assert_eq!((bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y), (2, 1, 4, 1));
    }

    #[test]
    fn test_clear_keeps_size() {
        let mut buffer = RootBuffer::new(4, 2);
        buffer.write(0, 0, "abcdefgh", &["bold"]).unwrap();
        buffer.clear();
        assert_eq!(buffer.len(), 8);
        assert!(buffer.to_lines().iter().all(|line| line == "    "));
        assert!(buffer.get(1, 1).is_blank());
    }

    #[test]
    fn test_resize_preserves_content() {
        let mut buffer = RootBuffer::new(8, 4);
        buffer.put(5, 3, "X", &[]).unwrap();
        buffer.put(1, 1, "Y", &[]).unwrap();

        buffer.resize(20, 10);
        assert_eq!(buffer.width(), 20);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.get(5, 3).symbol(), "X");
        assert!(buffer.get(15, 8).is_blank());

        buffer.resize(8, 4);
        assert_eq!(buffer.get(5, 3).symbol(), "X");
        assert_eq!(buffer.get(1, 1).symbol(), "Y");

        buffer.resize(3, 2);
        assert_eq!(buffer.get(1, 1).symbol(), "Y");
        assert!(buffer.get(5, 3).is_blank());

        buffer.resize(8, 4);
        assert!(buffer.get(5, 3).is_blank());
    }

    #[test]
    fn test_write_buffer_copies_full_rectangle() {
        // Taller than wide, so a width-only loop would miss the bottom rows.
        let mut source = RootBuffer::new(2, 4);
        source.write(0, 0, "abcdefgh", &["underline"]).unwrap();

        let mut target = RootBuffer::new(6, 6);
        target.write_buffer(1, 1, &source);

        assert_eq!(
            target.to_lines(),
            vec!["      ", " ab   ", " cd   ", " ef   ", " gh   ", "      "]
        );
        assert_eq!(target.get(1, 4), source.get(0, 3));
        assert!(target.get(1, 4).style().is_some());
    }

    #[test]
    fn test_set_skips_bounds() {
        let mut buffer = RootBuffer::new(4, 4);
        assert!(buffer.set(1, 1, Cell::new("q")));
        assert!(!buffer.set(4, 0, Cell::new("q")));
        assert_eq!(buffer.cell(1, 1).map(Cell::symbol), Some("q"));
        assert!(buffer.bounds().is_empty());
    }
}
