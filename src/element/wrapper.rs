//! `Wrapper`: a single-child pass-through with optional decoration.
//!
//! State and focus calls go straight to the child, and the child's signals
//! land in the caller's outbox untouched, so ancestors cannot tell a wrapper
//! is there. Only rendering differs: a [`Decoration`] may draw around the
//! child and hand it a smaller region. A decoration also sees every key after
//! the child has handled it.

use super::signal::Signals;
use super::traits::{Element, ElementBase, FocusState};
use crate::buffer::{Buffer, BufferView};
use crate::error::{BufferError, FocusError};
use crate::layout::Rect;
use crate::terminal::Key;

/// What a [`Wrapper`] draws around its child.
pub trait Decoration {
    /// Render `child` into `buffer`, adding decoration.
    fn decorate(&self, child: &dyn Element, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        child.render(buffer)
    }

    /// Observe a key after the child handled it.
    fn on_key(&mut self, key: &Key, out: &mut Signals) {
        let _ = (key, out);
    }
}

/// No decoration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl Decoration for Plain {}

/// Blank margins around the child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inset {
    /// Columns left of the child.
    pub left: u16,
    /// Rows above the child.
    pub top: u16,
    /// Columns right of the child.
    pub right: u16,
    /// Rows below the child.
    pub bottom: u16,
}

impl Inset {
    /// The same margin on every side.
    pub const fn uniform(margin: u16) -> Self {
        Self {
            left: margin,
            top: margin,
            right: margin,
            bottom: margin,
        }
    }
}

impl Decoration for Inset {
    fn decorate(&self, child: &dyn Element, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        let area = Rect::from_size(buffer.width(), buffer.height()).inset(self.left, self.top, self.right, self.bottom);
        let mut view = BufferView::from_rect(buffer, area);
        child.render(&mut view)
    }
}

/// A box-drawing frame, shrunk vertically to the child's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    /// Text drawn into the top edge.
    pub title: Option<String>,
    /// Frame style tags.
    pub styles: &'static [&'static str],
    /// Frame style tags while the child has focus.
    pub focus_styles: &'static [&'static str],
}

impl Default for Border {
    fn default() -> Self {
        Self {
            title: None,
            styles: &[],
            focus_styles: &["bold"],
        }
    }
}

impl Border {
    /// A frame with a title in its top edge.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

impl Decoration for Border {
    fn decorate(&self, child: &dyn Element, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        let (width, height) = (buffer.width(), buffer.height());
        if width < 2 || height < 2 {
            return Ok(());
        }

        let used = {
            let mut view = BufferView::from_rect(buffer, Rect::from_size(width, height).shrink(1));
            child.render(&mut view)?;
            view.bounds().used_height()
        };

        let styles = if child.is_focused() {
            self.focus_styles
        } else {
            self.styles
        };
        let right = i32::from(width) - 1;
        let bottom = i32::from(used.saturating_add(2).min(height)) - 1;

        for x in 1..right {
            buffer.put(x, 0, "─", styles)?;
            buffer.put(x, bottom, "─", styles)?;
        }
        for y in 1..bottom {
            buffer.put(0, y, "│", styles)?;
            buffer.put(right, y, "│", styles)?;
        }
        buffer.put(0, 0, "┌", styles)?;
        buffer.put(right, 0, "┐", styles)?;
        buffer.put(0, bottom, "└", styles)?;
        buffer.put(right, bottom, "┘", styles)?;

        if let Some(title) = &self.title {
            let mut view = BufferView::from_rect(buffer, Rect::new(2, 0, width.saturating_sub(4), 1));
            view.write(0, 0, title, styles)?;
        }
        Ok(())
    }
}

/// An element that wraps exactly one child.
pub struct Wrapper<D = Plain> {
    child: Box<dyn Element>,
    decoration: D,
}

impl Wrapper<Plain> {
    /// Wrap `child` without decoration.
    pub fn new(child: impl Element + 'static) -> Self {
        Self::decorated(child, Plain)
    }
}

impl<D: Decoration> Wrapper<D> {
    /// Wrap `child` with `decoration`.
    pub fn decorated(child: impl Element + 'static, decoration: D) -> Self {
        Self {
            child: Box::new(child),
            decoration,
        }
    }

    /// The wrapped child.
    pub fn child(&self) -> &dyn Element {
        &*self.child
    }

    /// The wrapped child, mutably.
    pub fn child_mut(&mut self) -> &mut (dyn Element + 'static) {
        &mut *self.child
    }

    /// The decoration.
    pub const fn decoration(&self) -> &D {
        &self.decoration
    }
}

impl<D: Decoration> Element for Wrapper<D> {
    fn base(&self) -> &ElementBase {
        self.child.base()
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        self.child.base_mut()
    }

    fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        self.decoration.decorate(&*self.child, buffer)
    }

    fn is_hidden(&self) -> bool {
        self.child.is_hidden()
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.child.set_hidden(hidden);
    }

    fn is_locked(&self) -> bool {
        self.child.is_locked()
    }

    fn set_locked(&mut self, locked: bool) {
        self.child.set_locked(locked);
    }

    fn is_focussable(&self) -> bool {
        self.child.is_focussable()
    }

    fn set_focussable(&mut self, focusable: bool) {
        self.child.set_focussable(focusable);
    }

    fn focus_state(&self) -> FocusState {
        self.child.focus_state()
    }

    fn child_at(&self, index: usize) -> Option<&dyn Element> {
        self.child.child_at(index)
    }

    fn focus(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        self.child.focus(out)
    }

    fn focus_first(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        self.child.focus_first(out)
    }

    fn focus_last(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        self.child.focus_last(out)
    }

    fn blur(&mut self, out: &mut Signals) {
        self.child.blur(out);
    }

    fn handle_key(&mut self, key: &Key, out: &mut Signals) -> Result<(), FocusError> {
        self.child.handle_key(key, out)?;
        self.on_key(key, out);
        Ok(())
    }

    fn on_key(&mut self, key: &Key, out: &mut Signals) {
        self.decoration.on_key(key, out);
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for Wrapper<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrapper")
            .field("decoration", &self.decoration)
            .field("focus_state", &self.child.focus_state())
            .finish_non_exhaustive()
    }
}
