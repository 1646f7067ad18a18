//! Key events delivered to elements.
//!
//! A deliberately small subset of crossterm's key model: enough to name
//! every key an interactive form cares about, and `Copy` so a [`Key`] can be
//! stored in configuration and compared by value.

use bitflags::bitflags;
use std::fmt;

/// Key codes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
    /// Null (Ctrl+Space on some terminals).
    Null,
}

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0001;
        /// Control key held.
        const CONTROL = 0b0010;
        /// Alt/Option key held.
        const ALT = 0b0100;
        /// Super/Command/Windows key held.
        const SUPER = 0b1000;
    }
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self::empty();
}

/// A key press: code plus modifiers.
///
/// Shift is folded into the code where the code already expresses it
/// (`'A'`, [`KeyCode::BackTab`]), so `Key::new(KeyCode::BackTab)` matches
/// what the terminal reports for Shift+Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during keypress.
    pub modifiers: KeyModifiers,
}

impl Key {
    /// An unmodified key.
    #[inline]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key with explicit modifiers.
    #[inline]
    pub const fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A printable character.
    #[inline]
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Ctrl plus a character, e.g. `Key::ctrl('c')`.
    #[inline]
    pub const fn ctrl(c: char) -> Self {
        Self::with_modifiers(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// The character this key types, if it is plain text input.
    pub fn text(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c)
                if !self
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Upper-case, underscore-joined names (`TAB`, `SHIFT_TAB`, `CTRL_C`), the
/// form used in logs.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("CTRL_")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("ALT_")?;
        }
        if self.modifiers.contains(KeyModifiers::SUPER) {
            f.write_str("SUPER_")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("SHIFT_")?;
        }

        match self.code {
            KeyCode::Char(c) if self.modifiers.is_empty() => write!(f, "{c}"),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Backspace => f.write_str("BACKSPACE"),
            KeyCode::Enter => f.write_str("ENTER"),
            KeyCode::Left => f.write_str("LEFT"),
            KeyCode::Right => f.write_str("RIGHT"),
            KeyCode::Up => f.write_str("UP"),
            KeyCode::Down => f.write_str("DOWN"),
            KeyCode::Home => f.write_str("HOME"),
            KeyCode::End => f.write_str("END"),
            KeyCode::PageUp => f.write_str("PAGE_UP"),
            KeyCode::PageDown => f.write_str("PAGE_DOWN"),
            KeyCode::Tab => f.write_str("TAB"),
            KeyCode::BackTab => f.write_str("SHIFT_TAB"),
            KeyCode::Delete => f.write_str("DELETE"),
            KeyCode::Insert => f.write_str("INSERT"),
            KeyCode::Esc => f.write_str("ESCAPE"),
            KeyCode::Null => f.write_str("NUL"),
        }
    }
}

/// Keys that move focus between siblings.
///
/// Every element consults the same pair, carried down with the signal
/// outbox, unless it is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusKeys {
    /// Moves focus forward.
    pub next: Key,
    /// Moves focus backward.
    pub previous: Key,
}

impl Default for FocusKeys {
    fn default() -> Self {
        Self {
            next: Key::new(KeyCode::Tab),
            previous: Key::new(KeyCode::BackTab),
        }
    }
}
