//! Tile grid for the visible items.
//!
//! Tiles are laid out left to right, top to bottom, in visible-set order.
//! A tile's slot number is therefore its index in the visible set, which is
//! what the lightbox is opened with.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::catalog::Item;
use crate::ui::surface::TileView;

use super::theme::{
    filter_glyph, filter_style, ACCENT_PRIMARY, BORDER_DEFAULT, BORDER_FOCUSED, TEXT_FAINT,
    TEXT_MUTED, TEXT_PRIMARY,
};

/// Grid geometry shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub tile_width: u16,
    pub tile_height: u16,
    /// First tile row shown at the top of the area
    pub scroll_row: usize,
}

impl GridLayout {
    pub fn new(tile_width: u16, tile_height: u16) -> Self {
        Self {
            tile_width: tile_width.max(1),
            tile_height: tile_height.max(1),
            scroll_row: 0,
        }
    }

    pub fn columns(&self, area: Rect) -> usize {
        usize::from((area.width / self.tile_width).max(1))
    }

    pub fn visible_rows(&self, area: Rect) -> usize {
        usize::from((area.height / self.tile_height).max(1))
    }

    /// Screen rectangle of `slot`, or `None` when scrolled out of view
    pub fn tile_rect(&self, area: Rect, slot: usize) -> Option<Rect> {
        let columns = self.columns(area);
        let row = (slot / columns).checked_sub(self.scroll_row)?;
        if row >= self.visible_rows(area) {
            return None;
        }
        let col = slot % columns;
        let x = area.x + u16::try_from(col).ok()? * self.tile_width;
        let y = area.y + u16::try_from(row).ok()? * self.tile_height;
        Some(Rect::new(x, y, self.tile_width, self.tile_height).intersection(area))
    }

    /// Slot under (column, row). The caller checks it against the number
    /// of tiles.
    pub fn slot_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        if !area.contains((column, row).into()) {
            return None;
        }
        let columns = self.columns(area);
        let col = usize::from((column - area.x) / self.tile_width);
        if col >= columns {
            return None;
        }
        let row = usize::from((row - area.y) / self.tile_height) + self.scroll_row;
        Some(row * columns + col)
    }

    /// Adjust `scroll_row` so that `slot` is on screen
    pub fn scroll_to(&mut self, area: Rect, slot: usize) {
        let row = slot / self.columns(area);
        let rows = self.visible_rows(area);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }
}

pub struct GalleryGrid<'a> {
    /// Items to draw, in slot order, with their presentation state
    tiles: Vec<(&'a Item, &'a TileView)>,
    layout: GridLayout,
    focused: Option<usize>,
}

impl<'a> GalleryGrid<'a> {
    pub fn new(tiles: Vec<(&'a Item, &'a TileView)>, layout: GridLayout) -> Self {
        Self {
            tiles,
            layout,
            focused: None,
        }
    }

    pub fn focused(mut self, slot: Option<usize>) -> Self {
        self.focused = slot;
        self
    }
}

impl Widget for GalleryGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (slot, (item, tile)) in self.tiles.iter().enumerate() {
            let Some(rect) = self.layout.tile_rect(area, slot) else {
                continue;
            };
            render_tile(item, tile, self.focused == Some(slot), rect, buf);
        }
    }
}

fn render_tile(item: &Item, tile: &TileView, focused: bool, area: Rect, buf: &mut Buffer) {
    let border_color = if focused {
        BORDER_FOCUSED
    } else if tile.entrance > 0 {
        ACCENT_PRIMARY
    } else {
        BORDER_DEFAULT
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if focused {
        block = block.border_type(BorderType::Thick);
    }
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if !tile.revealed {
        Paragraph::new(Span::styled("·", Style::default().fg(TEXT_FAINT))).render(inner, buf);
        return;
    }

    // Caption takes the last two rows when there is room for a swatch
    let caption_rows = inner.height.min(2);
    let swatch_rows = inner.height - caption_rows;
    let swatch_style = filter_style(&tile.filter);
    let glyph = filter_glyph(&tile.filter).to_string().repeat(usize::from(inner.width));
    for dy in 0..swatch_rows {
        buf.set_stringn(
            inner.x,
            inner.y + dy,
            &glyph,
            usize::from(inner.width),
            swatch_style,
        );
    }

    let caption = Rect::new(inner.x, inner.y + swatch_rows, inner.width, caption_rows);
    let mut title_style = Style::default().fg(TEXT_PRIMARY);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let lines = vec![
        Line::from(Span::styled(item.title.as_str(), title_style)),
        Line::from(Span::styled(
            item.category.as_str(),
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    Paragraph::new(lines).render(caption, buf);
}
