//! Status Bar Widget: Three-section status bar.
//!
//! A one-row bar with left, center, and right sections, commonly placed at
//! the top or bottom of a view. Each section gets at most a third of the
//! width.

use crate::buffer::Buffer;
use crate::element::{Element, ElementBase};
use crate::error::BufferError;
use unicode_segmentation::UnicodeSegmentation;

/// Configuration for the status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBarConfig {
    /// Style tags for the whole bar, background included.
    pub styles: &'static [&'static str],
    /// Extra style tags for the left section.
    pub left_styles: &'static [&'static str],
    /// Extra style tags for the center section.
    pub center_styles: &'static [&'static str],
    /// Extra style tags for the right section.
    pub right_styles: &'static [&'static str],
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            styles: &["inverse"],
            left_styles: &["bold"],
            center_styles: &[],
            right_styles: &["green"],
        }
    }
}

/// A three-section status bar (left, center, right).
#[derive(Debug, Default)]
pub struct StatusBar {
    base: ElementBase,
    /// Left section content.
    left: String,
    /// Center section content.
    center: String,
    /// Right section content.
    right: String,
    /// Configuration.
    config: StatusBarConfig,
}

impl StatusBar {
    /// Create an empty status bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty status bar with custom configuration.
    pub fn with_config(config: StatusBarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the left section content.
    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    /// Set the center section content.
    pub fn set_center(&mut self, text: impl Into<String>) {
        self.center = text.into();
    }

    /// Set the right section content.
    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    /// Set all sections at once.
    pub fn set_all(&mut self, left: impl Into<String>, center: impl Into<String>, right: impl Into<String>) {
        self.left = left.into();
        self.center = center.into();
        self.right = right.into();
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Get the center section content.
    pub fn center(&self) -> &str {
        &self.center
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Write at most `max` graphemes of `text` starting at column `x`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn section(
        buffer: &mut dyn Buffer,
        x: usize,
        text: &str,
        max: usize,
        styles: &[&str],
    ) -> Result<(), BufferError> {
        for (i, grapheme) in text.graphemes(true).take(max).enumerate() {
            buffer.put((x + i) as i32, 0, grapheme, styles)?;
        }
        Ok(())
    }
}

impl Element for StatusBar {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        let width = usize::from(buffer.width());
        let third = width / 3;
        let bar = self.config.styles;

        // Paint the bar background
        for x in 0..width {
            buffer.put(x as i32, 0, " ", bar)?;
        }

        let tags = |extra: &[&'static str]| -> Vec<&'static str> { bar.iter().chain(extra).copied().collect() };

        Self::section(buffer, 0, &self.left, third, &tags(self.config.left_styles))?;

        let center_len = self.center.graphemes(true).count().min(third);
        Self::section(buffer, (width - center_len) / 2, &self.center, center_len, &tags(self.config.center_styles))?;

        let right_len = self.right.graphemes(true).count().min(third);
        Self::section(buffer, width - right_len, &self.right, right_len, &tags(self.config.right_styles))
    }
}
