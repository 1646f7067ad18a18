//! `MultiWrapper`: a composite that coordinates focus among its children.
//!
//! Navigation skips hidden and unfocusable children. When it runs off either
//! end, an unlocked wrapper blurs itself and bubbles
//! [`Signal::FocusNext`]/[`Signal::FocusPrevious`] to its own parent; a
//! locked one wraps around.

use super::signal::{Signal, Signals};
use super::traits::{Element, ElementBase, FocusState};
use crate::buffer::{Buffer, BufferView, ViewOptions};
use crate::error::{BufferError, FocusError};
use crate::layout::Rect;
use crate::terminal::Key;
use tracing::trace;

/// How a [`MultiWrapper`] places its visible children.
pub trait Arrange {
    /// Render `children` into `buffer`. Hidden children must be skipped.
    fn arrange(&self, children: &[Box<dyn Element>], buffer: &mut dyn Buffer) -> Result<(), BufferError>;

    /// Observe a key after the focused child (index `focused`) handled it.
    ///
    /// Signals emitted here go to the wrapper's parent, e.g. `Change` after
    /// moving a selection highlight.
    fn on_key(&mut self, key: &Key, focused: Option<usize>, out: &mut Signals) {
        let _ = (key, focused, out);
    }
}

/// Children top to bottom, each shrunk to the rows it actually wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stack {
    /// Blank rows between children.
    pub gap: u16,
}

impl Arrange for Stack {
    fn arrange(&self, children: &[Box<dyn Element>], buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        let mut y = 0i32;
        for child in children.iter().filter(|child| !child.is_hidden()) {
            if y >= i32::from(buffer.height()) {
                break;
            }
            let mut view = BufferView::with_options(buffer, ViewOptions::at(0, y).clipped());
            child.render(&mut view)?;
            let used = view.bounds().used_height();
            if used > 0 {
                y += i32::from(used) + i32::from(self.gap);
            }
        }
        Ok(())
    }
}

/// Children left to right.
///
/// Each child is offered an even share of the columns still free, then
/// shrunk to the columns it actually wrote, so full-width children such as
/// bordered fields split the row instead of starving their siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    /// Blank columns between children.
    pub gap: u16,
}

impl Arrange for Row {
    fn arrange(&self, children: &[Box<dyn Element>], buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        let mut free = Rect::from_size(buffer.width(), buffer.height());
        let mut remaining = children.iter().filter(|child| !child.is_hidden()).count();

        for child in children.iter().filter(|child| !child.is_hidden()) {
            if free.is_empty() {
                break;
            }
            let count = u16::try_from(remaining).unwrap_or(u16::MAX);
            let gaps = self.gap.saturating_mul(count - 1);
            let share = free.width.saturating_sub(gaps) / count;
            remaining -= 1;

            let (slot, _) = free.split_horizontal(share);
            let mut view = BufferView::from_rect(buffer, slot);
            child.render(&mut view)?;
            let used = view.bounds().used_width();
            if used > 0 {
                free = free.split_horizontal(used.saturating_add(self.gap)).1;
            }
        }
        Ok(())
    }
}

/// A composite element with an ordered, fixed list of children.
pub struct MultiWrapper<A = Stack> {
    base: ElementBase,
    children: Vec<Box<dyn Element>>,
    /// Child that holds (or last held) the focus pointer.
    focused_child: Option<usize>,
    arrange: A,
}

impl MultiWrapper<Stack> {
    /// A vertical stack of `children`.
    pub fn new(children: Vec<Box<dyn Element>>) -> Self {
        Self::with_arrange(children, Stack::default())
    }
}

impl<A: Arrange> MultiWrapper<A> {
    /// `children` placed by a custom arrangement.
    pub fn with_arrange(children: Vec<Box<dyn Element>>, arrange: A) -> Self {
        Self {
            base: ElementBase::new(),
            children,
            focused_child: None,
            arrange,
        }
    }

    /// Builder form of [`Element::set_locked`].
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.set_locked(true);
        self
    }

    /// The managed children, in order.
    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    /// Mutable access to one child.
    ///
    /// Changing a child's `hidden` flag this way does not move focus; call
    /// [`focus_next`](Self::focus_next) if the focused child was hidden.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut (dyn Element + 'static)> {
        let child = self.children.get_mut(index)?;
        Some(&mut **child)
    }

    /// The arrangement.
    pub const fn arrange(&self) -> &A {
        &self.arrange
    }

    /// Index of the child holding the focus pointer, if any.
    ///
    /// The pointer survives [`blur`](Element::blur), so re-focusing the
    /// wrapper returns to the same child.
    pub const fn focused_child(&self) -> Option<usize> {
        self.focused_child
    }

    /// Move focus to the next focusable child.
    ///
    /// # Errors
    ///
    /// [`FocusError::NoFocusableElements`] when locked with nothing to focus.
    pub fn focus_next(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        if !self.is_focussable() && self.is_locked() {
            return Err(FocusError::NoFocusableElements);
        }

        let len = self.children.len();
        let mut position = self.focused_child.map_or(0, |index| index + 1);
        let found = loop {
            if position < len {
                if self.children[position].is_focussable() {
                    break position;
                }
                position += 1;
            } else if self.is_locked() {
                position = 0;
            } else {
                trace!("focus leaves subtree forward");
                self.blur(out);
                out.emit(Signal::FocusNext);
                return Ok(());
            }
        };

        self.blur(out);
        self.focused_child = Some(found);
        self.call_child(found, out, |child, inbox| child.focus_first(inbox))?;
        out.emit(Signal::Focus);
        Ok(())
    }

    /// Move focus to the previous focusable child.
    ///
    /// # Errors
    ///
    /// [`FocusError::NoFocusableElements`] when locked with nothing to focus.
    pub fn focus_previous(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        if !self.is_focussable() && self.is_locked() {
            return Err(FocusError::NoFocusableElements);
        }

        let len = self.children.len();
        // `None` stands for "before index 0".
        let mut position = self.focused_child.and_then(|index| index.checked_sub(1));
        let found = loop {
            match position {
                Some(index) if self.children[index].is_focussable() => break index,
                Some(index) => position = index.checked_sub(1),
                None if self.is_locked() => position = len.checked_sub(1),
                None => {
                    trace!("focus leaves subtree backward");
                    self.blur(out);
                    out.emit(Signal::FocusPrevious);
                    return Ok(());
                }
            }
        };

        self.blur(out);
        self.focused_child = Some(found);
        self.call_child(found, out, |child, inbox| child.focus_last(inbox))?;
        out.emit(Signal::Focus);
        Ok(())
    }

    /// Focus the child at `index` directly.
    ///
    /// # Errors
    ///
    /// [`FocusError::NotAChild`] if `index` is out of range, leaving the
    /// focus pointer untouched; otherwise whatever the child's
    /// [`focus`](Element::focus) returns.
    pub fn focus_child(&mut self, index: usize, out: &mut Signals) -> Result<(), FocusError> {
        let len = self.children.len();
        if index >= len {
            return Err(FocusError::NotAChild { index, len });
        }

        if self.focused_child != Some(index) {
            self.blur(out);
            self.focused_child = Some(index);
        }
        self.call_child(index, out, |child, inbox| child.focus(inbox))?;
        out.emit(Signal::Focus);
        Ok(())
    }

    fn blur_child(&mut self, index: usize, out: &mut Signals) -> Result<(), FocusError> {
        let mut inbox = out.child();
        self.children[index].blur(&mut inbox);
        self.bubble_change(index, &inbox, out);

        if self.focused_child == Some(index) {
            self.focus_next(out)?;
        }
        Ok(())
    }

    /// Run `op` on one child, then react to what it signalled.
    fn call_child<F>(&mut self, index: usize, out: &mut Signals, op: F) -> Result<(), FocusError>
    where
        F: FnOnce(&mut dyn Element, &mut Signals) -> Result<(), FocusError>,
    {
        let mut inbox = out.child();
        op(&mut *self.children[index], &mut inbox)?;

        for signal in inbox.take() {
            match signal {
                Signal::Change => {
                    if !self.children[index].is_hidden() {
                        out.emit(Signal::Change);
                    }
                }
                Signal::Blur => self.blur_child(index, out)?,
                Signal::Focus => self.focus_child(index, out)?,
                Signal::FocusNext => self.focus_next(out)?,
                Signal::FocusPrevious => self.focus_previous(out)?,
            }
        }
        Ok(())
    }

    fn bubble_change(&self, index: usize, inbox: &Signals, out: &mut Signals) {
        if inbox.contains(Signal::Change) && !self.children[index].is_hidden() {
            out.emit(Signal::Change);
        }
    }
}

impl<A: Arrange> Element for MultiWrapper<A> {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        self.arrange.arrange(&self.children, buffer)
    }

    fn is_focussable(&self) -> bool {
        !self.is_hidden() && self.children.iter().any(|child| child.is_focussable())
    }

    fn focus_state(&self) -> FocusState {
        match self.focused_child {
            Some(index) if self.children[index].is_focused() => FocusState::FocusedDescendant(index),
            _ => FocusState::Unfocused,
        }
    }

    fn child_at(&self, index: usize) -> Option<&dyn Element> {
        let child = self.children.get(index)?;
        Some(&**child)
    }

    fn focus(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        if !self.is_focussable() {
            return Err(FocusError::NotFocusable);
        }
        match self.focused_child {
            Some(index) => self.call_child(index, out, |child, inbox| child.focus(inbox)),
            None => self.focus_first(out),
        }
    }

    fn focus_first(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        if !self.is_focussable() {
            return Err(FocusError::NotFocusable);
        }
        self.blur(out);
        self.focused_child = self.children.iter().position(|child| child.is_focussable());
        match self.focused_child {
            Some(index) => self.call_child(index, out, |child, inbox| child.focus_first(inbox)),
            None => Ok(()),
        }
    }

    fn focus_last(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        if !self.is_focussable() {
            return Err(FocusError::NotFocusable);
        }
        self.blur(out);
        self.focused_child = self.children.iter().rposition(|child| child.is_focussable());
        match self.focused_child {
            Some(index) => self.call_child(index, out, |child, inbox| child.focus_last(inbox)),
            None => Ok(()),
        }
    }

    /// Blurs the focused child. Navigation signals raised while blurring are
    /// dropped; only `Change` bubbles.
    fn blur(&mut self, out: &mut Signals) {
        if let Some(index) = self.focused_child {
            let mut inbox = out.child();
            self.children[index].blur(&mut inbox);
            self.bubble_change(index, &inbox, out);
        }
    }

    fn handle_key(&mut self, key: &Key, out: &mut Signals) -> Result<(), FocusError> {
        match self.focus_state() {
            FocusState::FocusedDescendant(index) => {
                self.call_child(index, out, |child, inbox| child.handle_key(key, inbox))?;
                self.on_key(key, out);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_key(&mut self, key: &Key, out: &mut Signals) {
        self.arrange.on_key(key, self.focused_child, out);
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for MultiWrapper<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiWrapper")
            .field("base", &self.base)
            .field("children", &self.children.len())
            .field("focused_child", &self.focused_child)
            .field("arrange", &self.arrange)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RootBuffer;
    use crate::terminal::KeyCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Field {
        base: ElementBase,
        text: &'static str,
        change_on_blur: bool,
    }

    impl Field {
        fn new(text: &'static str, focusable: bool) -> Self {
            let base = if focusable {
                ElementBase::focusable()
            } else {
                ElementBase::new()
            };
            Self {
                base,
                text,
                change_on_blur: false,
            }
        }

        fn boxed(text: &'static str) -> Box<dyn Element> {
            Box::new(Self::new(text, true))
        }

        fn hidden(text: &'static str) -> Box<dyn Element> {
            let mut field = Self::new(text, true);
            field.set_hidden(true);
            Box::new(field)
        }
    }

    impl Element for Field {
        fn base(&self) -> &ElementBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ElementBase {
            &mut self.base
        }

        fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
            buffer.write(0, 0, self.text, &[])
        }

        fn blur(&mut self, out: &mut Signals) {
            self.base_mut().set_focused(false);
            if self.change_on_blur {
                out.emit(Signal::Change);
            }
        }

        fn on_key(&mut self, key: &Key, out: &mut Signals) {
            match key.code {
                KeyCode::Enter => out.emit(Signal::Blur),
                KeyCode::Char(_) => out.emit(Signal::Change),
                _ => {}
            }
        }
    }

    fn abc() -> MultiWrapper {
        MultiWrapper::new(vec![Field::boxed("A"), Field::hidden("B"), Field::boxed("C")])
    }

    fn focused(multi: &MultiWrapper) -> Vec<bool> {
        multi.children().iter().map(|child| child.is_focused()).collect()
    }

    #[test]
    fn test_focus_first_skips_to_first_focusable() {
        let mut multi = MultiWrapper::new(vec![
            Box::new(Field::new("x", false)),
            Field::boxed("A"),
            Field::boxed("C"),
        ]);
        multi.focus_first(&mut Signals::new()).unwrap();
        assert_eq!(multi.focus_state(), FocusState::FocusedDescendant(1));
    }

    #[test]
    fn test_focus_next_skips_hidden() {
        let mut multi = abc();
        let mut out = Signals::new();
        multi.focus_first(&mut out).unwrap();
        assert_eq!(focused(&multi), vec![true, false, false]);

        multi.focus_next(&mut out).unwrap();
        assert_eq!(focused(&multi), vec![false, false, true]);
        assert_eq!(multi.focused_child(), Some(2));
        assert_eq!(out.take(), vec![Signal::Focus]);
    }

    #[test]
    fn test_focus_next_bubbles_when_unlocked() {
        let mut multi = abc();
        let mut out = Signals::new();
        multi.focus_last(&mut out).unwrap();
        assert_eq!(multi.focused_child(), Some(2));

        multi.focus_next(&mut out).unwrap();
        assert_eq!(out.take(), vec![Signal::FocusNext]);
        assert_eq!(multi.focus_state(), FocusState::Unfocused);
        assert_eq!(focused(&multi), vec![false, false, false]);
    }

    #[test]
    fn test_focus_next_wraps_when_locked() {
        let mut multi = abc().locked();
        let mut out = Signals::new();
        multi.focus_last(&mut out).unwrap();

        multi.focus_next(&mut out).unwrap();
        assert_eq!(multi.focus_state(), FocusState::FocusedDescendant(0));
        assert_eq!(out.take(), vec![Signal::Focus]);
    }

    #[test]
    fn test_focus_previous_mirrors_next() {
        let mut multi = abc();
        let mut out = Signals::new();
        multi.focus_last(&mut out).unwrap();
        multi.focus_previous(&mut out).unwrap();
        assert_eq!(multi.focused_child(), Some(0));

        out.take();
        multi.focus_previous(&mut out).unwrap();
        assert_eq!(out.take(), vec![Signal::FocusPrevious]);
        assert!(!multi.is_focused());

        multi.set_locked(true);
        multi.focus_first(&mut out).unwrap();
        multi.focus_previous(&mut out).unwrap();
        assert_eq!(multi.focus_state(), FocusState::FocusedDescendant(2));
    }

    #[test]
    fn test_focus_previous_without_focus_enters_from_end_when_locked() {
        let mut multi = abc().locked();
        multi.focus_previous(&mut Signals::new()).unwrap();
        assert_eq!(multi.focused_child(), Some(2));
    }

    #[test]
    fn test_locked_with_nothing_focusable_fails() {
        let mut multi = MultiWrapper::new(vec![Field::hidden("B")]).locked();
        let mut out = Signals::new();
        assert_eq!(multi.focus_next(&mut out), Err(FocusError::NoFocusableElements));
        assert_eq!(multi.focus_previous(&mut out), Err(FocusError::NoFocusableElements));
        assert_eq!(multi.focus(&mut out), Err(FocusError::NotFocusable));
    }

    #[test]
    fn test_focus_child_rejects_foreign_index() {
        let mut multi = abc();
        let mut out = Signals::new();
        multi.focus_first(&mut out).unwrap();

        let err = multi.focus_child(3, &mut out).unwrap_err();
        assert_eq!(err, FocusError::NotAChild { index: 3, len: 3 });
        assert_eq!(multi.focused_child(), Some(0));
        assert_eq!(focused(&multi), vec![true, false, false]);
    }

    #[test]
    fn test_focus_child_moves_pointer() {
        let mut multi = abc();
        let mut out = Signals::new();
        multi.focus_first(&mut out).unwrap();
        multi.focus_child(2, &mut out).unwrap();
        assert_eq!(focused(&multi), vec![false, false, true]);
        assert_eq!(out.take(), vec![Signal::Focus]);

        assert_eq!(multi.focus_child(1, &mut out), Err(FocusError::NotFocusable));
    }

    #[test]
    fn test_refocus_returns_to_remembered_child() {
        let mut multi = abc();
        let mut out = Signals::new();
        multi.focus_last(&mut out).unwrap();
        multi.blur(&mut out);
        assert!(!multi.is_focused());
        assert_eq!(multi.focused_child(), Some(2));

        multi.focus(&mut out).unwrap();
        assert_eq!(multi.focus_state(), FocusState::FocusedDescendant(2));
    }

    #[test]
    fn test_keys_route_to_focused_child() {
        let mut multi = abc().locked();
        let mut out = Signals::new();
        multi.focus_first(&mut out).unwrap();

        multi.handle_key(&Key::new(KeyCode::Tab), &mut out).unwrap();
        assert_eq!(multi.focused_child(), Some(2));
        assert_eq!(out.take(), vec![Signal::Focus]);

        multi.handle_key(&Key::char('z'), &mut out).unwrap();
        assert_eq!(out.take(), vec![Signal::Change]);
    }

    #[test]
    fn test_child_blur_hands_focus_onward() {
        let mut multi = abc().locked();
        let mut out = Signals::new();
        multi.focus_first(&mut out).unwrap();

        multi.handle_key(&Key::new(KeyCode::Enter), &mut out).unwrap();
        assert_eq!(multi.focused_child(), Some(2));
        assert!(multi.children()[2].is_focused());
    }

    #[test]
    fn test_change_from_hidden_child_is_dropped() {
        let mut field = Field::new("A", true);
        field.change_on_blur = true;
        let mut multi = MultiWrapper::new(vec![Box::new(field), Field::boxed("C")]);
        let mut out = Signals::new();
        multi.focus_first(&mut out).unwrap();

        multi.blur(&mut out);
        assert_eq!(out.take(), vec![Signal::Change]);

        multi.focus_first(&mut out).unwrap();
        out.take();
        if let Some(child) = multi.child_mut(0) {
            child.set_hidden(true);
        }
        multi.blur(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_nested_focus_bubbles_between_subtrees() {
        let left = MultiWrapper::new(vec![Field::boxed("a"), Field::boxed("b")]);
        let right = MultiWrapper::new(vec![Field::boxed("c")]);
        let mut root = MultiWrapper::new(vec![Box::new(left), Box::new(right)]).locked();
        let mut out = Signals::new();

        root.focus_last(&mut out).unwrap();
        assert_eq!(crate::element::focus_path(&root), Some(vec![1, 0]));

        root.handle_key(&Key::new(KeyCode::Tab), &mut out).unwrap();
        assert_eq!(crate::element::focus_path(&root), Some(vec![0, 0]));

        root.handle_key(&Key::new(KeyCode::Tab), &mut out).unwrap();
        assert_eq!(crate::element::focus_path(&root), Some(vec![0, 1]));

        root.handle_key(&Key::new(KeyCode::BackTab), &mut out).unwrap();
        root.handle_key(&Key::new(KeyCode::BackTab), &mut out).unwrap();
        assert_eq!(crate::element::focus_path(&root), Some(vec![1, 0]));
    }

    #[test]
    fn test_stack_shrinks_to_fit() {
        let multi = MultiWrapper::with_arrange(
            vec![Field::boxed("one"), Field::hidden("two"), Field::boxed("three")],
            Stack { gap: 1 },
        );
        let mut root = RootBuffer::new(6, 4);
        multi.render(&mut root).unwrap();
        assert_eq!(root.to_lines(), vec!["one   ", "      ", "three ", "      "]);
    }

    #[test]
    fn test_row_shrinks_to_fit() {
        let multi = MultiWrapper::with_arrange(vec![Field::boxed("ab"), Field::boxed("cd")], Row { gap: 1 });
        let mut root = RootBuffer::new(6, 1);
        multi.render(&mut root).unwrap();
        assert_eq!(root.to_lines(), vec!["ab cd "]);
    }

    type KeyLog = Rc<RefCell<Vec<(&'static str, KeyCode, Option<usize>)>>>;

    /// Stacks children and logs every key it observes.
    struct Selecting {
        name: &'static str,
        log: KeyLog,
    }

    impl Arrange for Selecting {
        fn arrange(&self, children: &[Box<dyn Element>], buffer: &mut dyn Buffer) -> Result<(), BufferError> {
            Stack::default().arrange(children, buffer)
        }

        fn on_key(&mut self, key: &Key, focused: Option<usize>, out: &mut Signals) {
            self.log.borrow_mut().push((self.name, key.code, focused));
            if key.code == KeyCode::Down {
                out.emit(Signal::Change);
            }
        }
    }

    #[test]
    fn test_every_ancestor_observes_keys_after_focused_child() {
        let log = KeyLog::default();
        let inner = MultiWrapper::with_arrange(
            vec![Field::boxed("a"), Field::boxed("b")],
            Selecting {
                name: "inner",
                log: Rc::clone(&log),
            },
        );
        let mut root = MultiWrapper::with_arrange(
            vec![Field::boxed("top"), Box::new(inner)],
            Selecting {
                name: "root",
                log: Rc::clone(&log),
            },
        )
        .locked();
        let mut out = Signals::new();
        root.focus_first(&mut out).unwrap();
        root.handle_key(&Key::new(KeyCode::Tab), &mut out).unwrap();
        log.borrow_mut().clear();
        out.take();

        root.handle_key(&Key::char('x'), &mut out).unwrap();
        assert_eq!(out.take(), vec![Signal::Change]);
        assert_eq!(
            *log.borrow(),
            vec![("inner", KeyCode::Char('x'), Some(0)), ("root", KeyCode::Char('x'), Some(1))]
        );

        root.handle_key(&Key::new(KeyCode::Down), &mut out).unwrap();
        assert!(out.contains(Signal::Change));
        assert_eq!(log.borrow().len(), 4);
    }

    #[test]
    fn test_unfocused_composite_ignores_keys() {
        let log = KeyLog::default();
        let mut multi = MultiWrapper::with_arrange(
            vec![Field::boxed("a")],
            Selecting {
                name: "multi",
                log: Rc::clone(&log),
            },
        );
        let mut out = Signals::new();
        multi.handle_key(&Key::char('x'), &mut out).unwrap();
        assert!(out.is_empty());
        assert!(log.borrow().is_empty());
        assert!(multi.arrange().log.borrow().is_empty());
    }

    #[test]
    fn test_row_splits_between_full_width_children() {
        struct Fill(&'static str, ElementBase);

        impl Element for Fill {
            fn base(&self) -> &ElementBase {
                &self.1
            }

            fn base_mut(&mut self) -> &mut ElementBase {
                &mut self.1
            }

            fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
                let row = self.0.repeat(usize::from(buffer.width()));
                buffer.write(0, 0, &row, &[])
            }
        }

        let multi = MultiWrapper::with_arrange(
            vec![
                Box::new(Fill("a", ElementBase::new())),
                Box::new(Fill("b", ElementBase::new())),
                Box::new(Fill("c", ElementBase::new())),
            ],
            Row { gap: 1 },
        );
        let mut root = RootBuffer::new(11, 1);
        multi.render(&mut root).unwrap();
        assert_eq!(root.to_lines(), vec!["aaa bbb ccc"]);
    }
}
