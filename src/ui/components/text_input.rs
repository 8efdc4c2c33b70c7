//! Single-line text input state for the search box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Text with a cursor. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Byte offset of the `index`-th character
    fn byte_offset(&self, index: usize) -> usize {
        self.input
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    fn char_before_cursor(&self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        self.input.chars().nth(self.cursor - 1)
    }

    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.input.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.input.remove(offset);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let end = self.cursor;
        while self.char_before_cursor() == Some(' ') {
            self.cursor -= 1;
        }
        while matches!(self.char_before_cursor(), Some(c) if c != ' ') {
            self.cursor -= 1;
        }
        let start_byte = self.byte_offset(self.cursor);
        let end_byte = self.byte_offset(end);
        self.input.drain(start_byte..end_byte);
    }

    /// Render the text, or `placeholder` when empty. The cursor cell is
    /// drawn reversed when `focused`.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: (&str, Style),
        focused: bool,
    ) {
        if self.input.is_empty() {
            Paragraph::new(placeholder.0)
                .style(placeholder.1)
                .render(area, buf);
        } else {
            Paragraph::new(self.input.as_str())
                .style(style)
                .render(area, buf);
        }

        if focused && area.width > 0 {
            let before: String = self.input.chars().take(self.cursor).collect();
            let column = u16::try_from(before.width()).unwrap_or(u16::MAX);
            let cursor_x = area.x + column.min(area.width.saturating_sub(1));
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}
