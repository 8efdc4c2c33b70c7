//! Terminal rendering surface.
//!
//! [`TerminalSurface`] is the retained state the widgets draw from. It only
//! changes through [`RenderSignal`]s from the gallery (plus animation ticks),
//! so the screen shows exactly what the core asked for, fades included.

use crate::catalog::ALL_CATEGORIES;
use crate::gallery::{LightboxContent, Opacity, RenderSignal, RenderSurface, DEFAULT_FILTER};

/// Frames a tile stays highlighted after its entrance signal
pub const ENTRANCE_FRAMES: u8 = 12;

/// Per-item presentation state, indexed by catalog position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub visible: bool,
    /// Set once the staggered reveal reached this tile
    pub revealed: bool,
    /// Remaining entrance highlight frames
    pub entrance: u8,
    pub filter: String,
}

impl Default for TileView {
    fn default() -> Self {
        Self {
            visible: true,
            revealed: false,
            entrance: 0,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub content: LightboxContent,
    pub counter: String,
    pub frame: Opacity,
    pub image: Opacity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSurface {
    tiles: Vec<TileView>,
    loading: bool,
    active_category: String,
    active_filter: String,
    lightbox: Option<LightboxView>,
    scroll_locked: bool,
    search_result: Option<String>,
    no_results: bool,
    clear_button: bool,
}

impl TerminalSurface {
    /// Surface for a catalog of `len` items. Tiles start visible but
    /// unrevealed until the gallery's loading phase reveals them.
    pub fn new(len: usize) -> Self {
        Self {
            tiles: vec![TileView::default(); len],
            loading: false,
            active_category: ALL_CATEGORIES.to_string(),
            active_filter: DEFAULT_FILTER.to_string(),
            lightbox: None,
            scroll_locked: false,
            search_result: None,
            no_results: false,
            clear_button: false,
        }
    }

    /// Advance per-frame animations
    pub fn tick(&mut self) {
        for tile in &mut self.tiles {
            tile.entrance = tile.entrance.saturating_sub(1);
        }
    }

    pub fn tiles(&self) -> &[TileView] {
        &self.tiles
    }

    pub fn tile(&self, position: usize) -> Option<&TileView> {
        self.tiles.get(position)
    }

    /// Catalog positions currently shown in the grid, in catalog order
    pub fn shown_positions(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.visible)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn lightbox(&self) -> Option<&LightboxView> {
        self.lightbox.as_ref()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn search_result(&self) -> Option<&str> {
        self.search_result.as_deref()
    }

    pub fn shows_no_results(&self) -> bool {
        self.no_results
    }

    pub fn shows_clear_button(&self) -> bool {
        self.clear_button
    }

    fn tile_mut(&mut self, position: usize) -> Option<&mut TileView> {
        let tile = self.tiles.get_mut(position);
        if tile.is_none() {
            tracing::debug!(position, "Signal for unknown tile");
        }
        tile
    }
}

impl RenderSurface for TerminalSurface {
    fn apply(&mut self, signal: RenderSignal) {
        match signal {
            RenderSignal::ItemVisibility { position, visible } => {
                if let Some(tile) = self.tile_mut(position) {
                    tile.visible = visible;
                    if !visible {
                        tile.entrance = 0;
                    }
                }
            }
            RenderSignal::ItemEntrance { position } => {
                if let Some(tile) = self.tile_mut(position) {
                    tile.entrance = ENTRANCE_FRAMES;
                }
            }
            RenderSignal::ItemRevealed { position } => {
                if let Some(tile) = self.tile_mut(position) {
                    tile.revealed = true;
                }
            }
            RenderSignal::LoadingVisible(loading) => self.loading = loading,
            RenderSignal::ImageFilter { position, token } => {
                if let Some(tile) = self.tile_mut(position) {
                    tile.filter = token;
                }
            }
            RenderSignal::ActiveCategory(tag) => self.active_category = tag,
            RenderSignal::ActiveFilter(token) => self.active_filter = token,
            RenderSignal::ShowLightbox { content, counter } => {
                self.lightbox = Some(LightboxView {
                    content,
                    counter,
                    frame: Opacity::Opaque,
                    image: Opacity::Opaque,
                });
            }
            RenderSignal::SwapLightboxContent(content) => {
                if let Some(view) = &mut self.lightbox {
                    view.content = content;
                }
            }
            RenderSignal::LightboxOpacity(opacity) => {
                if let Some(view) = &mut self.lightbox {
                    view.frame = opacity;
                }
            }
            RenderSignal::LightboxImageOpacity(opacity) => {
                if let Some(view) = &mut self.lightbox {
                    view.image = opacity;
                }
            }
            RenderSignal::HideLightbox => self.lightbox = None,
            RenderSignal::ScrollLocked(locked) => self.scroll_locked = locked,
            RenderSignal::CounterText(counter) => {
                if let Some(view) = &mut self.lightbox {
                    view.counter = counter;
                }
            }
            RenderSignal::SearchResultText(text) => self.search_result = text,
            RenderSignal::NoResultsVisible(shown) => self.no_results = shown,
            RenderSignal::ClearButtonVisible(shown) => self.clear_button = shown,
        }
    }
}
