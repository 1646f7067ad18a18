//! Cell: The atomic unit of terminal display.
//!
//! A cell is one visible character plus the escape sequences that style it.
//!
//! # Symbol storage
//!
//! Nearly every symbol (ASCII, Latin, CJK, most emoji) fits in four UTF-8
//! bytes and is stored inline. Longer grapheme clusters (ZWJ sequences,
//! stacked combining marks) spill into a shared `Arc<str>`.
//!
//! # Style storage
//!
//! Styles are resolved to their opening/closing sequences when the cell is
//! written and shared behind an `Arc`, so a `write` of a whole styled string
//! allocates the codes once rather than once per character.

use crate::style::StyleSheet;
use std::fmt;
use std::sync::Arc;

/// The visible part of a cell.
#[derive(Clone, PartialEq, Eq, Hash)]
enum Symbol {
    /// Up to four UTF-8 bytes stored in place.
    Inline { bytes: [u8; 4], len: u8 },
    /// Grapheme clusters longer than four bytes.
    Spilled(Arc<str>),
}

impl Symbol {
    const SPACE: Self = Self::Inline {
        bytes: [b' ', 0, 0, 0],
        len: 1,
    };

    fn new(s: &str) -> Self {
        let raw = s.as_bytes();
        if raw.len() > 4 {
            return Self::Spilled(Arc::from(s));
        }
        let mut bytes = [0u8; 4];
        bytes[..raw.len()].copy_from_slice(raw);
        #[allow(clippy::cast_possible_truncation)]
        let len = raw.len() as u8;
        Self::Inline { bytes, len }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Inline { bytes, len } => {
                std::str::from_utf8(&bytes[..*len as usize]).unwrap_or(" ")
            }
            Self::Spilled(s) => s,
        }
    }
}

/// Opening and closing escape sequences for an ordered list of style tags.
///
/// Openers are concatenated in tag order and closers in reverse order, so
/// nested styles unwind innermost-first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StyleCodes {
    open: String,
    close: String,
}

impl StyleCodes {
    /// Resolve `tags` against `sheet`.
    ///
    /// Returns `None` when nothing resolves, so an unknown tag produces a
    /// cell identical to an unstyled one.
    pub fn resolve(sheet: &dyn StyleSheet, tags: &[&str]) -> Option<Self> {
        let mut codes = Self::default();
        for tag in tags {
            if let Some((open, _)) = sheet.resolve(tag) {
                codes.open.push_str(open);
            }
        }
        for tag in tags.iter().rev() {
            if let Some((_, close)) = sheet.resolve(tag) {
                codes.close.push_str(close);
            }
        }

        if codes.open.is_empty() && codes.close.is_empty() {
            None
        } else {
            Some(codes)
        }
    }

    /// The opening sequence.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing sequence.
    pub fn close(&self) -> &str {
        &self.close
    }
}

/// A single terminal cell.
///
/// Two cells are equal when both the symbol and the resolved styling match,
/// which is exactly the condition under which the diff renderer may skip it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: Symbol,
    style: Option<Arc<StyleCodes>>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// An unstyled space.
    pub const BLANK: Self = Self {
        symbol: Symbol::SPACE,
        style: None,
    };

    /// Create an unstyled cell.
    ///
    /// No validation happens here; [`Buffer::put`](super::Buffer::put) is
    /// the checked entry point. An empty symbol is stored as a space.
    pub fn new(symbol: &str) -> Self {
        if symbol.is_empty() {
            return Self::BLANK;
        }
        Self {
            symbol: Symbol::new(symbol),
            style: None,
        }
    }

    /// Create an unstyled cell from a `char`.
    pub fn from_char(c: char) -> Self {
        let mut bytes = [0u8; 4];
        let len = c.encode_utf8(&mut bytes).len();
        #[allow(clippy::cast_possible_truncation)]
        let len = len as u8;
        Self {
            symbol: Symbol::Inline { bytes, len },
            style: None,
        }
    }

    /// Attach resolved styling.
    #[must_use]
    pub fn with_style(mut self, style: Option<Arc<StyleCodes>>) -> Self {
        self.style = style;
        self
    }

    /// The visible symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        self.symbol.as_str()
    }

    /// The resolved styling, if any.
    #[inline]
    pub fn style(&self) -> Option<&StyleCodes> {
        self.style.as_deref()
    }

    /// Whether the symbol spilled out of inline storage.
    pub const fn is_spilled(&self) -> bool {
        matches!(self.symbol, Symbol::Spilled(_))
    }

    /// An unstyled space.
    pub fn is_blank(&self) -> bool {
        self.style.is_none() && self.symbol == Symbol::SPACE
    }
}

/// Formats the cell as the literal string a terminal needs: openers, symbol,
/// closers.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.style {
            Some(style) => write!(f, "{}{}{}", style.open, self.symbol(), style.close),
            None => f.write_str(self.symbol()),
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.style {
            Some(style) => write!(f, "Cell({:?} {:?})", self.symbol(), style.open),
            None => write!(f, "Cell({:?})", self.symbol()),
        }
    }
}
