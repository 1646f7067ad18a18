//! Text Input Widget: Single-line text input with cursor.
//!
//! A focusable, single-line editor. Edits emit [`Signal::Change`]; Enter
//! emits [`Signal::Blur`] so the parent hands focus to the next field.

use crate::buffer::{Buffer, BufferView, BufferWrapper, ViewOptions};
use crate::element::{Element, ElementBase, Signal, Signals};
use crate::error::BufferError;
use crate::style::visible_len;
use crate::terminal::{Key, KeyCode};

/// Configuration for the text input widget.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Prompt prefix (e.g., "> ").
    pub prompt: String,
    /// Placeholder text shown when empty.
    pub placeholder: String,
    /// Style tags for the text.
    pub styles: &'static [&'static str],
    /// Style tags added around the text area while focused.
    pub focus_styles: &'static [&'static str],
    /// Style tags for the prompt.
    pub prompt_styles: &'static [&'static str],
    /// Style tags for the placeholder.
    pub placeholder_styles: &'static [&'static str],
    /// Style tags for the cell under the cursor.
    pub cursor_styles: &'static [&'static str],
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            prompt: String::from("> "),
            placeholder: String::new(),
            styles: &[],
            focus_styles: &["underline"],
            prompt_styles: &["cyan"],
            placeholder_styles: &["gray"],
            cursor_styles: &["inverse"],
        }
    }
}

/// A single-line text input widget with cursor and editing support.
#[derive(Debug)]
pub struct TextInput {
    base: ElementBase,
    /// Current text content.
    content: String,
    /// Cursor position (byte offset, always on a char boundary).
    cursor: usize,
    /// Configuration.
    config: TextInputConfig,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    /// Create an empty text input.
    pub fn new() -> Self {
        Self::with_config(TextInputConfig::default())
    }

    /// Create an empty text input with custom configuration.
    pub const fn with_config(config: TextInputConfig) -> Self {
        Self {
            base: ElementBase::focusable(),
            content: String::new(),
            cursor: 0,
            config,
        }
    }

    /// Builder: set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Builder: set the prompt.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Get the current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the content, moving cursor to end.
    pub fn set_content(&mut self, content: &str) {
        content.clone_into(&mut self.content);
        self.cursor = self.content.len();
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    fn insert_char(&mut self, c: char) -> bool {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.content.remove(prev);
        self.cursor = prev;
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        true
    }

    fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary();
        true
    }

    fn cursor_right(&mut self) -> bool {
        match self.content[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    const fn cursor_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    const fn cursor_end(&mut self) -> bool {
        let end = self.content.len();
        let moved = self.cursor != end;
        self.cursor = end;
        moved
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i)
    }

    /// Draw the editable area into a one-row buffer `width` columns wide.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render_text(&self, buffer: &mut dyn Buffer, width: usize, focused: bool) -> Result<(), BufferError> {
        if width == 0 {
            return Ok(());
        }
        let cursor_styles = self.config.cursor_styles;
        let mut glyph = [0u8; 4];

        if self.content.is_empty() {
            buffer.write(0, 0, &self.config.placeholder, self.config.placeholder_styles)?;
            if focused {
                let first = self.config.placeholder.chars().next().unwrap_or(' ');
                buffer.put(0, 0, first.encode_utf8(&mut glyph), cursor_styles)?;
            }
            return Ok(());
        }

        let cursor = self.cursor();
        let scroll = if cursor >= width { cursor - width + 1 } else { 0 };

        for (i, c) in self.content.chars().skip(scroll).take(width).enumerate() {
            let styles = if focused && i + scroll == cursor {
                cursor_styles
            } else {
                self.config.styles
            };
            buffer.put(i as i32, 0, c.encode_utf8(&mut glyph), styles)?;
        }

        let visual = cursor - scroll;
        if focused && cursor == self.content.chars().count() && visual < width {
            buffer.put(visual as i32, 0, " ", cursor_styles)?;
        }
        Ok(())
    }
}

impl Element for TextInput {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&self, buffer: &mut dyn Buffer) -> Result<(), BufferError> {
        buffer.write(0, 0, &self.config.prompt, self.config.prompt_styles)?;

        let prompt_len = visible_len(&self.config.prompt);
        let width = usize::from(buffer.width()).saturating_sub(prompt_len);
        let options = ViewOptions::at(prompt_len as i32, 0).sized(width as u16, 1).clipped();
        let mut area = BufferView::with_options(buffer, options);

        let focused = self.is_focused();
        if focused {
            let mut styled = BufferWrapper::with_styles(&mut area, self.config.focus_styles);
            self.render_text(&mut styled, width, true)
        } else {
            self.render_text(&mut area, width, false)
        }
    }

    fn on_key(&mut self, key: &Key, out: &mut Signals) {
        let changed = match key.code {
            KeyCode::Enter => {
                out.emit(Signal::Blur);
                false
            }
            KeyCode::Char(_) => key.text().is_some_and(|c| self.insert_char(c)),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Home => self.cursor_home(),
            KeyCode::End => self.cursor_end(),
            _ => false,
        };
        if changed {
            out.emit(Signal::Change);
        }
    }
}
