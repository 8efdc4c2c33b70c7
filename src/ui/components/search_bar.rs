//! Search box with a clear button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use super::text_input::TextInputState;
use super::theme::{BORDER_DEFAULT, BORDER_FOCUSED, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY};

const CLEAR_LABEL: &str = "[x]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit {
    Input,
    Clear,
}

pub struct SearchBar<'a> {
    input: &'a TextInputState,
    focused: bool,
    show_clear: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a TextInputState) -> Self {
        Self {
            input,
            focused: false,
            show_clear: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_clear(mut self, show: bool) -> Self {
        self.show_clear = show;
        self
    }

    fn block(&self) -> Block<'static> {
        let border = if self.focused {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Search ")
    }

    fn clear_rect(inner: Rect) -> Rect {
        Rect::new(inner.right().saturating_sub(3), inner.y, 3, 1).intersection(inner)
    }

    /// What a click at (column, row) lands on. The clear button only counts
    /// while it is shown.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<SearchHit> {
        let point = (column, row).into();
        if !area.contains(point) {
            return None;
        }
        let inner = self.block().inner(area);
        if self.show_clear && Self::clear_rect(inner).contains(point) {
            Some(SearchHit::Clear)
        } else {
            Some(SearchHit::Input)
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let mut text_area = Rect::new(inner.x, inner.y, inner.width, 1);
        if self.show_clear {
            text_area.width = text_area.width.saturating_sub(4);
            let clear = Self::clear_rect(inner);
            buf.set_string(clear.x, clear.y, CLEAR_LABEL, Style::default().fg(TEXT_MUTED));
        }

        self.input.render(
            text_area,
            buf,
            Style::default().fg(TEXT_PRIMARY),
            ("Search by title or description", Style::default().fg(TEXT_FAINT)),
            self.focused,
        );
    }
}
