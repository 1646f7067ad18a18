//! Diff renderer: turn frames into the minimal set of terminal writes.
//!
//! The renderer keeps a copy of what the terminal currently shows. Each new
//! frame is compared against it cell by cell, and only cells whose symbol or
//! styling changed are written, one device write per cell. A cell is
//! written with its own opening and closing codes, so no style state leaks
//! between writes and the terminal never needs an attribute reset.

use super::{Buffer, RootBuffer};
use crate::terminal::TerminalDriver;
use std::fmt::Write as _;
use std::io;
use tracing::{debug, trace};

/// Result of rendering one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells that were different (and therefore written).
    pub cells_changed: usize,
    /// Whether the terminal size changed and the screen was cleared first.
    pub cleared: bool,
}

/// Retained-mode renderer for one terminal.
#[derive(Debug, Clone)]
pub struct DiffRenderer {
    /// What the terminal currently shows.
    current: RootBuffer,
    /// Reused to format each changed cell.
    scratch: String,
    frames: u64,
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl DiffRenderer {
    /// A renderer that assumes a blank terminal of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            current: RootBuffer::new(width, height),
            scratch: String::with_capacity(32),
            frames: 0,
        }
    }

    /// What the renderer believes the terminal shows.
    pub const fn current(&self) -> &RootBuffer {
        &self.current
    }

    /// Number of frames rendered while attached.
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Blank both the retained copy and the device.
    ///
    /// # Errors
    ///
    /// Returns an error if the device rejects the clear.
    pub fn clear(&mut self, terminal: &mut dyn TerminalDriver) -> io::Result<()> {
        self.current.clear();
        terminal.clear()
    }

    /// Bring the terminal up to date with `frame`.
    ///
    /// When the terminal size no longer matches the retained copy, the copy
    /// is resized and the screen cleared before diffing. `frame` is resized
    /// to the terminal size too. Nothing happens while the driver is
    /// detached.
    ///
    /// # Errors
    ///
    /// Returns an error if a device write fails.
    pub fn render(
        &mut self,
        frame: &mut RootBuffer,
        terminal: &mut dyn TerminalDriver,
    ) -> io::Result<DiffResult> {
        let mut result = DiffResult::default();
        if !terminal.is_attached() {
            return Ok(result);
        }

        let (width, height) = terminal.size();
        if self.current.width() != width || self.current.height() != height {
            debug!(
                from_width = self.current.width(),
                from_height = self.current.height(),
                width,
                height,
                "terminal size changed, clearing"
            );
            self.current.resize(width, height);
            self.clear(terminal)?;
            result.cleared = true;
        }
        frame.resize(width, height);

        for y in 0..height {
            for x in 0..width {
                let Some(next) = frame.cell(x, y) else {
                    continue;
                };
                if self.current.cell(x, y) == Some(next) {
                    continue;
                }

                self.scratch.clear();
                let _ = write!(self.scratch, "{next}");
                terminal.put(x + 1, y + 1, &self.scratch)?;
                self.current.set(x, y, next.clone());
                result.cells_changed += 1;
            }
        }

        terminal.flush()?;
        self.frames += 1;
        trace!(
            frame = self.frames,
            cells = result.cells_changed,
            cleared = result.cleared,
            "frame rendered"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::HeadlessTerminal;

    fn attached(width: u16, height: u16) -> HeadlessTerminal {
        let mut term = HeadlessTerminal::new(width, height);
        term.attach("diff").unwrap();
        term
    }

    #[test]
    fn test_identical_frames_write_nothing() {
        let mut term = attached(10, 3);
        let mut renderer = DiffRenderer::new(10, 3);

        let mut frame = RootBuffer::new(10, 3);
        frame.write(0, 0, "hello", &["bold"]).unwrap();
        let result = renderer.render(&mut frame.clone(), &mut term).unwrap();
        assert_eq!(result.cells_changed, 5);

        term.reset_counters();
        let result = renderer.render(&mut frame, &mut term).unwrap();
        assert_eq!(result, DiffResult::default());
        assert_eq!(term.put_count(), 0);
    }

    #[test]
    fn test_one_write_per_changed_cell() {
        let mut term = attached(10, 2);
        let mut renderer = DiffRenderer::new(10, 2);

        let mut frame = RootBuffer::new(10, 2);
        frame.write(0, 0, "abc", &[]).unwrap();
        renderer.render(&mut frame, &mut term).unwrap();

        term.reset_counters();
        let mut frame = RootBuffer::new(10, 2);
        frame.write(0, 0, "abd", &[]).unwrap();
        frame.put(9, 1, "z", &[]).unwrap();
        let result = renderer.render(&mut frame, &mut term).unwrap();

        assert_eq!(result.cells_changed, 2);
        assert_eq!(term.put_count(), 2);
        assert_eq!(term.lines(), vec!["abd       ", "         z"]);
    }

    #[test]
    fn test_style_change_alone_is_rewritten() {
        let mut term = attached(4, 1);
        let mut renderer = DiffRenderer::new(4, 1);

        let mut frame = RootBuffer::new(4, 1);
        frame.write(0, 0, "ab", &[]).unwrap();
        renderer.render(&mut frame, &mut term).unwrap();

        let mut frame = RootBuffer::new(4, 1);
        frame.write(0, 0, "ab", &["inverse"]).unwrap();
        let result = renderer.render(&mut frame, &mut term).unwrap();
        assert_eq!(result.cells_changed, 2);
        assert!(term.is_inverse(0, 0));
    }

    #[test]
    fn test_removed_content_is_blanked() {
        let mut term = attached(5, 1);
        let mut renderer = DiffRenderer::new(5, 1);

        let mut frame = RootBuffer::new(5, 1);
        frame.write(0, 0, "hello", &[]).unwrap();
        renderer.render(&mut frame, &mut term).unwrap();

        let mut frame = RootBuffer::new(5, 1);
        frame.write(0, 0, "he", &[]).unwrap();
        let result = renderer.render(&mut frame, &mut term).unwrap();
        assert_eq!(result.cells_changed, 3);
        assert_eq!(term.line(0), "he   ");
    }

    #[test]
    fn test_resize_forces_clear_and_full_repaint() {
        let mut term = attached(4, 1);
        let mut renderer = DiffRenderer::new(4, 1);

        let mut frame = RootBuffer::new(4, 1);
        frame.write(0, 0, "ab", &[]).unwrap();
        renderer.render(&mut frame, &mut term).unwrap();
        assert_eq!(term.clear_count(), 0);

        term.resize(6, 2);
        let mut frame = RootBuffer::new(4, 1);
        frame.write(0, 0, "ab", &[]).unwrap();
        let result = renderer.render(&mut frame, &mut term).unwrap();

        assert!(result.cleared);
        assert_eq!(term.clear_count(), 1);
        assert_eq!(result.cells_changed, 2);
        assert_eq!((frame.width(), frame.height()), (6, 2));
        assert_eq!((renderer.current().width(), renderer.current().height()), (6, 2));
    }

    #[test]
    fn test_default_renderer_clears_on_first_frame() {
        let mut term = attached(3, 1);
        let mut renderer = DiffRenderer::default();
        let mut frame = RootBuffer::new(3, 1);
        let result = renderer.render(&mut frame, &mut term).unwrap();
        assert!(result.cleared);
        assert_eq!(result.cells_changed, 0);
    }

    #[test]
    fn test_detached_terminal_is_skipped() {
        let mut term = HeadlessTerminal::new(3, 1);
        let mut renderer = DiffRenderer::new(3, 1);
        let mut frame = RootBuffer::new(3, 1);
        frame.write(0, 0, "abc", &[]).unwrap();

        let result = renderer.render(&mut frame, &mut term).unwrap();
        assert_eq!(result.cells_changed, 0);
        assert_eq!(renderer.frame_count(), 0);
        assert!(renderer.current().cell(0, 0).is_some_and(|cell| cell.is_blank()));
    }
}
