//! Error types.
//!
//! Every error here is a contract violation by the calling widget tree:
//! nothing is retried, the caller decides whether to abort. Out-of-bounds
//! buffer access is deliberately *not* an error and never shows up here.

use thiserror::Error;

/// Errors raised by buffer writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// `put` was handed more than one visible character.
    #[error("invalid character {symbol:?}: expected one visible character, found {visible}")]
    InvalidCharacter {
        /// The rejected input, escapes included.
        symbol: String,
        /// Number of visible characters after stripping escapes.
        visible: usize,
    },
}

/// Errors raised by the focus protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// Focus was requested on a hidden or non-focusable element.
    #[error("element is not focussable")]
    NotFocusable,

    /// Navigation inside a locked subtree that has nothing to focus.
    #[error("no focussable elements in locked subtree")]
    NoFocusableElements,

    /// `focus_child` was called with an index this composite does not manage.
    #[error("child {index} is not part of this element ({len} children)")]
    NotAChild {
        /// Requested child index.
        index: usize,
        /// Number of managed children.
        len: usize,
    },
}

/// Errors raised by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// `show_view` named a view that was never registered.
    #[error("view not found: {0}")]
    ViewNotFound(String),

    /// `add_view` was called twice with the same name.
    #[error("view already registered: {0}")]
    DuplicateView(String),

    /// `start` was called before any view was registered.
    #[error("no views added")]
    NoViews,

    /// Focus protocol violation inside the active view.
    #[error(transparent)]
    Focus(#[from] FocusError),

    /// Buffer contract violation while rendering.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// Terminal I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for application-level operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BufferError::InvalidCharacter {
            symbol: "ab".to_string(),
            visible: 2,
        };
        assert!(err.to_string().contains("found 2"));

        let err = FocusError::NotAChild { index: 4, len: 3 };
        assert_eq!(err.to_string(), "child 4 is not part of this element (3 children)");

        let err: AppError = FocusError::NotFocusable.into();
        assert_eq!(err.to_string(), "element is not focussable");
    }
}
