//! The `Element` trait: rendering plus the focus protocol.

use super::signal::{Signal, Signals};
use crate::buffer::Buffer;
use crate::error::{BufferError, FocusError};
use crate::terminal::Key;

/// Where focus sits relative to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusState {
    /// Neither this element nor anything below it has focus.
    #[default]
    Unfocused,
    /// This element receives key input.
    FocusedSelf,
    /// The child at this index (or something below it) receives key input.
    FocusedDescendant(usize),
}

/// Flags every element carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementBase {
    hidden: bool,
    locked: bool,
    focusable: bool,
    focused: bool,
}

impl ElementBase {
    /// Visible, unlocked, not focusable.
    pub const fn new() -> Self {
        Self {
            hidden: false,
            locked: false,
            focusable: false,
            focused: false,
        }
    }

    /// Visible, unlocked and focusable.
    pub const fn focusable() -> Self {
        Self {
            focusable: true,
            ..Self::new()
        }
    }

    /// The raw hidden flag.
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set the hidden flag.
    pub const fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// The raw locked flag.
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Set the locked flag.
    pub const fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// The focusable flag, ignoring `hidden`.
    pub const fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Set the focusable flag.
    pub const fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Whether this element itself holds focus.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set or clear self-focus.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// A node in the widget tree.
///
/// Leaves only implement [`base`](Self::base), [`base_mut`](Self::base_mut)
/// and usually [`render`](Self::render) and [`on_key`](Self::on_key); the
/// focus protocol comes from the default methods. Composites override the
/// focus methods to delegate to their children.
///
/// Hidden elements are not rendered by their parents and can never take
/// focus.
pub trait Element {
    /// Shared flags.
    fn base(&self) -> &ElementBase;

    /// Shared flags, mutably.
    fn base_mut(&mut self) -> &mut ElementBase;

    /// Draw into `buffer`, which is already sized to this element's region.
    ///
    /// The buffer may hold content from a previous layer; an element must
    /// neither assume it is blank nor depend on what is there.
    fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        let _ = buffer;
        Ok(())
    }

    /// Whether the element is hidden.
    fn is_hidden(&self) -> bool {
        self.base().is_hidden()
    }

    /// Hide or show the element.
    fn set_hidden(&mut self, hidden: bool) {
        self.base_mut().set_hidden(hidden);
    }

    /// Whether focus navigation is trapped inside this element.
    fn is_locked(&self) -> bool {
        self.base().is_locked()
    }

    /// Trap (or release) focus navigation inside this element.
    fn set_locked(&mut self, locked: bool) {
        self.base_mut().set_locked(locked);
    }

    /// Whether this element can take focus right now.
    fn is_focussable(&self) -> bool {
        let base = self.base();
        base.is_focusable() && !base.is_hidden()
    }

    /// Allow or forbid focus. Hidden elements stay unfocusable either way.
    fn set_focussable(&mut self, focusable: bool) {
        self.base_mut().set_focusable(focusable);
    }

    /// Where focus sits relative to this element.
    fn focus_state(&self) -> FocusState {
        if self.base().is_focused() {
            FocusState::FocusedSelf
        } else {
            FocusState::Unfocused
        }
    }

    /// Whether this element or a descendant has focus.
    fn is_focused(&self) -> bool {
        self.focus_state() != FocusState::Unfocused
    }

    /// The child at `index`, for composites.
    fn child_at(&self, index: usize) -> Option<&dyn Element> {
        let _ = index;
        None
    }

    /// Take focus.
    fn focus(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        let _ = out;
        if !self.is_focussable() {
            return Err(FocusError::NotFocusable);
        }
        self.base_mut().set_focused(true);
        Ok(())
    }

    /// Take focus, entering from the start.
    fn focus_first(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        self.focus(out)
    }

    /// Take focus, entering from the end.
    fn focus_last(&mut self, out: &mut Signals) -> Result<(), FocusError> {
        self.focus(out)
    }

    /// Drop focus. Total and idempotent.
    fn blur(&mut self, out: &mut Signals) {
        let _ = out;
        self.base_mut().set_focused(false);
    }

    /// Receive a key press while focused.
    ///
    /// Unless locked, the configured focus keys become
    /// [`Signal::FocusNext`]/[`Signal::FocusPrevious`]. Every key, focus keys
    /// included, then goes to [`on_key`](Self::on_key).
    fn handle_key(&mut self, key: &Key, out: &mut Signals) -> Result<(), FocusError> {
        if !self.is_locked() {
            let keys = *out.focus_keys();
            if *key == keys.next {
                out.emit(Signal::FocusNext);
            } else if *key == keys.previous {
                out.emit(Signal::FocusPrevious);
            }
        }
        self.on_key(key, out);
        Ok(())
    }

    /// Per-widget key handling.
    fn on_key(&mut self, key: &Key, out: &mut Signals) {
        let _ = (key, out);
    }
}

/// Child indices from `root` down to the element that receives key input.
///
/// Empty when `root` itself has focus; `None` when nothing below `root` is
/// focused.
pub fn focus_path(root: &dyn Element) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut node = root;
    loop {
        match node.focus_state() {
            FocusState::Unfocused => return None,
            FocusState::FocusedSelf => return Some(path),
            FocusState::FocusedDescendant(index) => {
                path.push(index);
                node = node.child_at(index)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::KeyCode;

    #[derive(Default)]
    struct Leaf {
        base: ElementBase,
        keys: Vec<Key>,
    }

    impl Element for Leaf {
        fn base(&self) -> &ElementBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ElementBase {
            &mut self.base
        }

        fn on_key(&mut self, key: &Key, _out: &mut Signals) {
            self.keys.push(*key);
        }
    }

    #[test]
    fn test_focus_requires_focusable() {
        let mut leaf = Leaf::default();
        let mut out = Signals::new();
        assert_eq!(leaf.focus(&mut out), Err(FocusError::NotFocusable));

        leaf.set_focussable(true);
        leaf.focus(&mut out).unwrap();
        assert_eq!(leaf.focus_state(), FocusState::FocusedSelf);
        assert!(out.is_empty());
    }

    #[test]
    fn test_hidden_is_never_focusable() {
        let mut leaf = Leaf {
            base: ElementBase::focusable(),
            ..Leaf::default()
        };
        leaf.set_hidden(true);
        assert!(!leaf.is_focussable());
        assert_eq!(leaf.focus_first(&mut Signals::new()), Err(FocusError::NotFocusable));
    }

    #[test]
    fn test_blur_is_idempotent() {
        let mut leaf = Leaf {
            base: ElementBase::focusable(),
            ..Leaf::default()
        };
        let mut out = Signals::new();
        leaf.focus_last(&mut out).unwrap();
        leaf.blur(&mut out);
        leaf.blur(&mut out);
        assert_eq!(leaf.focus_state(), FocusState::Unfocused);
    }

    #[test]
    fn test_focus_keys_bubble_unless_locked() {
        let mut leaf = Leaf::default();
        let mut out = Signals::new();
        leaf.handle_key(&Key::new(KeyCode::Tab), &mut out).unwrap();
        leaf.handle_key(&Key::new(KeyCode::BackTab), &mut out).unwrap();
        leaf.handle_key(&Key::char('a'), &mut out).unwrap();
        assert_eq!(out.take(), vec![Signal::FocusNext, Signal::FocusPrevious]);
        assert_eq!(leaf.keys.len(), 3);

        leaf.set_locked(true);
        leaf.handle_key(&Key::new(KeyCode::Tab), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_focus_path_of_leaf() {
        let mut leaf = Leaf {
            base: ElementBase::focusable(),
            ..Leaf::default()
        };
        assert_eq!(focus_path(&leaf), None);
        leaf.focus(&mut Signals::new()).unwrap();
        assert_eq!(focus_path(&leaf), Some(vec![]));
    }
}
