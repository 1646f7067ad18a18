//! Signals: what an element tells its parent.
//!
//! Elements never hold a reference to their parent. Instead every focus or
//! key operation receives a [`Signals`] outbox; the parent inspects it when
//! the call returns and reacts (re-focus, bubble further, repaint).

use crate::terminal::FocusKeys;

/// A notification from a child to whatever owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The element wants focus, or a composite just moved focus inside itself.
    Focus,
    /// The element gives up focus and wants it handed onward.
    Blur,
    /// Content changed; the screen needs a repaint.
    Change,
    /// Focus should move to the next sibling of this subtree.
    FocusNext,
    /// Focus should move to the previous sibling of this subtree.
    FocusPrevious,
}

/// Outbox for [`Signal`]s emitted during one operation.
///
/// Carries the focus-key configuration down the tree so every element
/// interprets navigation keys the same way.
#[derive(Debug, Clone, Default)]
pub struct Signals {
    queue: Vec<Signal>,
    keys: FocusKeys,
}

impl Signals {
    /// An empty outbox with the default focus keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty outbox with custom focus keys.
    pub const fn with_keys(keys: FocusKeys) -> Self {
        Self {
            queue: Vec::new(),
            keys,
        }
    }

    /// A fresh outbox for a child call, sharing this one's focus keys.
    #[must_use]
    pub const fn child(&self) -> Self {
        Self::with_keys(self.keys)
    }

    /// The keys that move focus.
    pub const fn focus_keys(&self) -> &FocusKeys {
        &self.keys
    }

    /// Emit a signal.
    #[inline]
    pub fn emit(&mut self, signal: Signal) {
        self.queue.push(signal);
    }

    /// Whether `signal` was emitted.
    pub fn contains(&self, signal: Signal) -> bool {
        self.queue.contains(&signal)
    }

    /// Whether nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The signals emitted so far, oldest first.
    pub fn as_slice(&self) -> &[Signal] {
        &self.queue
    }

    /// Take every emitted signal, oldest first, leaving the outbox empty.
    pub fn take(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.queue)
    }
}
