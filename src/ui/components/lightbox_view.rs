//! Lightbox overlay: dimmed backdrop, centered panel, prev/next arrows,
//! close button and counter.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::gallery::Opacity;
use crate::ui::surface::LightboxView;

use super::theme::{
    filter_glyph, filter_style, ACCENT_PRIMARY, BACKDROP_BG, LIGHTBOX_BG, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// What a click on the overlay landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxHit {
    Backdrop,
    Panel,
    Prev,
    Next,
    Close,
}

/// Centered panel inside `area`, leaving a margin of backdrop on every side
pub fn panel_rect(area: Rect) -> Rect {
    let width = (area.width * 3 / 4).max(area.width.min(24));
    let height = (area.height * 3 / 4).max(area.height.min(10));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn close_rect(panel: Rect) -> Rect {
    Rect::new(panel.right().saturating_sub(4), panel.y, 3, 1).intersection(panel)
}

fn arrow_rects(panel: Rect) -> (Rect, Rect) {
    let y = panel.y + panel.height / 2;
    (
        Rect::new(panel.x, y, 1, 1),
        Rect::new(panel.right().saturating_sub(1), y, 1, 1),
    )
}

pub fn hit_test(area: Rect, column: u16, row: u16) -> LightboxHit {
    let panel = panel_rect(area);
    let point = (column, row).into();
    if !panel.contains(point) {
        return LightboxHit::Backdrop;
    }
    let (prev, next) = arrow_rects(panel);
    if close_rect(panel).contains(point) {
        LightboxHit::Close
    } else if prev.contains(point) {
        LightboxHit::Prev
    } else if next.contains(point) {
        LightboxHit::Next
    } else {
        LightboxHit::Panel
    }
}

pub struct LightboxOverlay<'a> {
    view: &'a LightboxView,
    filter: &'a str,
}

impl<'a> LightboxOverlay<'a> {
    pub fn new(view: &'a LightboxView) -> Self {
        Self { view, filter: "" }
    }

    /// Visual filter token applied to the displayed image
    pub fn filter(mut self, token: &'a str) -> Self {
        self.filter = token;
        self
    }
}

impl Widget for LightboxOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fading = self.view.frame == Opacity::Transparent;

        Clear.render(area, buf);
        Block::default()
            .style(Style::default().bg(BACKDROP_BG))
            .render(area, buf);

        let panel = panel_rect(area);

        let mut frame_style = Style::default().bg(LIGHTBOX_BG).fg(TEXT_PRIMARY);
        if fading {
            frame_style = frame_style.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT_PRIMARY))
            .style(frame_style)
            .title(Line::from(format!(" {} ", self.view.content.title)).left_aligned())
            .title_bottom(Line::from(format!(" {} ", self.view.counter)).right_aligned());
        let inner = block.inner(panel);
        block.render(panel, buf);

        buf.set_string(
            close_rect(panel).x,
            panel.y,
            "[x]",
            Style::default().fg(TEXT_SECONDARY),
        );
        let (prev, next) = arrow_rects(panel);
        let arrow_style = Style::default().fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD);
        buf.set_string(prev.x, prev.y, "‹", arrow_style);
        buf.set_string(next.x, next.y, "›", arrow_style);

        if fading || inner.width < 2 || inner.height == 0 {
            return;
        }

        // Image area with a one-column gutter for the arrows
        let text_rows = inner.height.min(4);
        let image = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height - text_rows,
        );
        if self.view.image == Opacity::Opaque {
            let glyph = filter_glyph(self.filter)
                .to_string()
                .repeat(usize::from(image.width));
            let style = filter_style(self.filter);
            for dy in 0..image.height {
                buf.set_stringn(image.x, image.y + dy, &glyph, usize::from(image.width), style);
            }
        }

        let text = Rect::new(inner.x + 1, image.bottom(), image.width, text_rows);
        let lines = vec![
            Line::from(Span::styled(
                self.view.content.image_ref.as_str(),
                Style::default().fg(TEXT_MUTED),
            )),
            Line::from(Span::styled(
                self.view.content.description.as_str(),
                Style::default().fg(TEXT_SECONDARY),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text, buf);
    }
}
