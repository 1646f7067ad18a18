//! Label Widget: static, non-focusable text.

use crate::buffer::Buffer;
use crate::element::{Element, ElementBase};
use crate::error::BufferError;
use crate::style::visible_len;

/// Text drawn line by line, wrapping at the buffer's right edge.
#[derive(Debug, Clone, Default)]
pub struct Label {
    base: ElementBase,
    text: String,
    styles: &'static [&'static str],
}

impl Label {
    /// Create an unstyled label. `\n` starts a new row.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: ElementBase::new(),
            text: text.into(),
            styles: &[],
        }
    }

    /// Builder: set the style tags.
    #[must_use]
    pub const fn styled(mut self, styles: &'static [&'static str]) -> Self {
        self.styles = styles;
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Element for Label {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        let width = usize::from(buffer.width()).max(1);
        let mut y = 0;
        for line in self.text.lines() {
            if y >= i32::from(buffer.height()) {
                break;
            }
            buffer.write(0, y, line, self.styles)?;
            let rows = visible_len(line).div_ceil(width).max(1);
            y = y.saturating_add(i32::try_from(rows).unwrap_or(i32::MAX));
        }
        Ok(())
    }
}
