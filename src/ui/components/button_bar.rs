//! A single row of clickable buttons with one active entry.
//!
//! Used for both the category bar and the visual filter bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{BUTTON_ACTIVE_BG, BUTTON_BG, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

const BUTTON_GAP: u16 = 1;

pub struct ButtonBar<'a> {
    title: &'a str,
    labels: &'a [String],
    active: Option<usize>,
}

impl<'a> ButtonBar<'a> {
    pub fn new(title: &'a str, labels: &'a [String]) -> Self {
        Self {
            title,
            labels,
            active: None,
        }
    }

    pub fn active(mut self, index: Option<usize>) -> Self {
        self.active = index;
        self
    }

    fn title_width(&self) -> u16 {
        if self.title.is_empty() {
            0
        } else {
            // "Title: "
            u16::try_from(self.title.width() + 2).unwrap_or(u16::MAX)
        }
    }

    /// Screen rectangle of every button that fits in `area`, in label order.
    /// Buttons that do not fit are left out.
    pub fn button_rects(&self, area: Rect) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.labels.len());
        let right = area.x.saturating_add(area.width);
        let mut x = area.x.saturating_add(self.title_width());

        for label in self.labels {
            let width = u16::try_from(label.width() + 2).unwrap_or(u16::MAX);
            if x.saturating_add(width) > right {
                break;
            }
            rects.push(Rect::new(x, area.y, width, 1));
            x = x.saturating_add(width + BUTTON_GAP);
        }
        rects
    }

    /// Index of the button under (column, row), if any
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        self.button_rects(area)
            .iter()
            .position(|rect| rect.contains((column, row).into()))
    }
}

impl Widget for ButtonBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if !self.title.is_empty() {
            let title = Line::from(Span::styled(
                format!("{}: ", self.title),
                Style::default().fg(TEXT_MUTED),
            ));
            buf.set_line(area.x, area.y, &title, area.width);
        }

        for (i, rect) in self.button_rects(area).into_iter().enumerate() {
            let style = if self.active == Some(i) {
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .bg(BUTTON_ACTIVE_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_SECONDARY).bg(BUTTON_BG)
            };
            let text = format!(" {} ", self.labels[i]);
            buf.set_stringn(rect.x, rect.y, text, usize::from(rect.width), style);
        }
    }
}
