//! The gallery controller: owner of the view state.
//!
//! Every user-facing operation is a method on [`Gallery`]. Each one mutates
//! [`ViewState`] synchronously, recomputes the visible set when category or
//! query change, reconciles the lightbox against it, and then describes the
//! presentation changes to the render surface. Fades are split into an
//! immediate signal and a deferred one queued on the [`TransitionQueue`].

use std::time::Duration;

use crate::catalog::{Catalog, Item};

use super::error::GalleryError;
use super::filter::{normalize_query, recompute, CategoryFilter};
use super::lightbox::{counter_text, Direction, LightboxState};
use super::signal::{LightboxContent, Opacity, RenderSignal, RenderSurface};
use super::transition::{TransitionQueue, TransitionTiming, VisualChannel};

/// Visual filter token meaning "unfiltered"
pub const DEFAULT_FILTER: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    category: CategoryFilter,
    /// Normalized (lowercase, trimmed) search text
    query: String,
    visual_filter: String,
    /// Catalog positions passing the current category and query
    visible: Vec<usize>,
    /// Index into `visible`; meaningful only while the lightbox is open
    selected_index: usize,
    lightbox: LightboxState,
}

impl ViewState {
    fn initial(catalog: &Catalog) -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
            visual_filter: DEFAULT_FILTER.to_string(),
            visible: (0..catalog.len()).collect(),
            selected_index: 0,
            lightbox: LightboxState::Closed,
        }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visual_filter(&self) -> &str {
        &self.visual_filter
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn lightbox(&self) -> LightboxState {
        self.lightbox
    }
}

pub struct Gallery<S> {
    catalog: Catalog,
    state: ViewState,
    surface: S,
    transitions: TransitionQueue,
    timing: TransitionTiming,
}

impl<S: RenderSurface> Gallery<S> {
    pub fn new(catalog: Catalog, surface: S, timing: TransitionTiming) -> Self {
        let state = ViewState::initial(&catalog);
        Self {
            catalog,
            state,
            surface,
            transitions: TransitionQueue::new(),
            timing,
        }
    }

    /// Run the loading phase: show the loader, then hide it and reveal
    /// items one after another.
    pub fn start(&mut self) {
        self.emit(RenderSignal::LoadingVisible(true));
        self.emit(RenderSignal::ActiveCategory(
            self.state.category.as_str().to_string(),
        ));
        self.emit(RenderSignal::ActiveFilter(self.state.visual_filter.clone()));

        let loading = self.timing.loading;
        self.transitions.replace(
            VisualChannel::Loading,
            loading,
            [RenderSignal::LoadingVisible(false)],
        );
        for position in 0..self.catalog.len() {
            let delay = loading + self.timing.reveal_stagger * position as u32;
            self.transitions.replace(
                VisualChannel::Reveal(position),
                delay,
                [RenderSignal::ItemRevealed { position }],
            );
        }
        tracing::debug!(items = self.catalog.len(), "Gallery started");
    }

    // ========== View state ==========

    pub fn set_category(&mut self, tag: &str) -> Result<(), GalleryError> {
        let category = CategoryFilter::parse(tag);
        if let CategoryFilter::Only(ref name) = category {
            if !self.catalog.has_category(name) {
                tracing::warn!(category = %name, "Rejected unknown category");
                return Err(GalleryError::UnknownCategory(name.clone()));
            }
        }

        self.emit(RenderSignal::ActiveCategory(category.as_str().to_string()));
        self.state.category = category;
        self.refilter();
        tracing::debug!(
            category = %self.state.category.as_str(),
            visible = self.state.visible.len(),
            "Category changed"
        );
        Ok(())
    }

    pub fn set_query(&mut self, raw: &str) {
        self.state.query = normalize_query(raw);
        self.refilter();
        self.emit_search_signals();
        tracing::debug!(
            query = %self.state.query,
            visible = self.state.visible.len(),
            "Query changed"
        );
    }

    /// Apply a visual filter token to every catalog image, visible or not.
    pub fn set_visual_filter(&mut self, token: &str) {
        self.state.visual_filter = token.to_string();
        for position in 0..self.catalog.len() {
            self.emit(RenderSignal::ImageFilter {
                position,
                token: token.to_string(),
            });
        }
        self.emit(RenderSignal::ActiveFilter(token.to_string()));
        tracing::debug!(token, "Visual filter changed");
    }

    /// Back to category `all`, no query, no visual filter, lightbox closed.
    pub fn reset(&mut self) {
        self.emit(RenderSignal::ActiveCategory(
            CategoryFilter::All.as_str().to_string(),
        ));
        self.state.category = CategoryFilter::All;
        self.state.query.clear();
        self.refilter();
        self.emit_search_signals();
        self.set_visual_filter(DEFAULT_FILTER);
        tracing::debug!("Gallery reset");
    }

    // ========== Lightbox ==========

    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        let len = self.state.visible.len();
        if len == 0 {
            tracing::warn!(index, "Rejected open on empty visible set");
            return Err(GalleryError::EmptyVisibleSet);
        }
        if index >= len {
            tracing::warn!(index, len, "Rejected open with out-of-range index");
            return Err(GalleryError::IndexOutOfRange { index, len });
        }

        self.state.lightbox = LightboxState::Open;
        self.state.selected_index = index;

        let content = self.content_at(index);
        self.transitions.cancel(VisualChannel::LightboxImage);
        self.emit(RenderSignal::ShowLightbox {
            content,
            counter: counter_text(index, len),
        });
        self.emit(RenderSignal::ScrollLocked(true));
        self.emit(RenderSignal::LightboxImageOpacity(Opacity::Opaque));
        self.emit(RenderSignal::LightboxOpacity(Opacity::Transparent));
        self.transitions.replace(
            VisualChannel::LightboxFrame,
            self.timing.open_fade,
            [RenderSignal::LightboxOpacity(Opacity::Opaque)],
        );

        tracing::debug!(index, len, "Lightbox opened");
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), GalleryError> {
        if !self.state.lightbox.is_open() {
            tracing::warn!("Rejected close while lightbox closed");
            return Err(GalleryError::LightboxClosed);
        }
        self.close_lightbox();
        Ok(())
    }

    /// Step the lightbox one item, wrapping around. Returns the new index.
    pub fn navigate(&mut self, direction: Direction) -> Result<usize, GalleryError> {
        if !self.state.lightbox.is_open() {
            tracing::warn!(%direction, "Rejected navigate while lightbox closed");
            return Err(GalleryError::LightboxClosed);
        }
        let len = self.state.visible.len();
        let Some(index) = direction.step(self.state.selected_index, len) else {
            tracing::warn!(%direction, "Rejected navigate on empty visible set");
            return Err(GalleryError::EmptyVisibleSet);
        };
        self.state.selected_index = index;
        let content = self.content_at(index);

        self.emit(RenderSignal::LightboxImageOpacity(Opacity::Transparent));
        self.transitions.replace(
            VisualChannel::LightboxImage,
            self.timing.swap_fade,
            [
                RenderSignal::SwapLightboxContent(content),
                RenderSignal::CounterText(counter_text(index, len)),
                RenderSignal::LightboxImageOpacity(Opacity::Opaque),
            ],
        );

        tracing::debug!(%direction, index, len, "Lightbox navigated");
        Ok(index)
    }

    // ========== Clock ==========

    /// Flush deferred visual signals that are due after `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for signal in self.transitions.advance(dt) {
            self.surface.apply(signal);
        }
    }

    #[cfg(test)]
    pub fn transitions_idle(&self) -> bool {
        self.transitions.is_idle()
    }

    // ========== Queries ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_open(&self) -> bool {
        self.state.lightbox.is_open()
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    /// Number of images in the current visible set
    pub fn visible_len(&self) -> usize {
        self.state.visible.len()
    }

    /// One-based index shown in the counter
    pub fn display_index(&self) -> usize {
        self.state.selected_index + 1
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.state
            .visible
            .iter()
            .filter_map(|&position| self.catalog.get(position))
    }

    /// Item under the lightbox, if open
    pub fn current_item(&self) -> Option<&Item> {
        if !self.is_open() {
            return None;
        }
        self.state
            .visible
            .get(self.state.selected_index)
            .and_then(|&position| self.catalog.get(position))
    }

    pub fn counter_text(&self) -> Option<String> {
        self.is_open()
            .then(|| counter_text(self.state.selected_index, self.state.visible.len()))
    }

    // ========== Internals ==========

    fn emit(&mut self, signal: RenderSignal) {
        self.surface.apply(signal);
    }

    fn content_at(&self, index: usize) -> LightboxContent {
        let position = self.state.visible[index];
        LightboxContent::from_item(&self.catalog.items()[position])
    }

    /// Recompute the visible set, reset the index and sweep item visibility.
    fn refilter(&mut self) {
        self.state.visible = recompute(&self.catalog, &self.state.category, &self.state.query);
        self.state.selected_index = 0;

        if self.state.lightbox.is_open() {
            tracing::debug!("Visible set changed while lightbox open; closing");
            self.close_lightbox();
        }

        let mut next_visible = self.state.visible.iter().peekable();
        for position in 0..self.catalog.len() {
            let visible = next_visible.next_if(|&&p| p == position).is_some();
            self.surface
                .apply(RenderSignal::ItemVisibility { position, visible });
            if visible {
                self.surface.apply(RenderSignal::ItemEntrance { position });
            }
        }
    }

    fn emit_search_signals(&mut self) {
        let count = self.state.visible.len();
        let searching = !self.state.query.is_empty();

        let text = searching.then(|| {
            format!(
                "Found {} result{} for \"{}\"",
                count,
                if count == 1 { "" } else { "s" },
                self.state.query
            )
        });
        self.emit(RenderSignal::SearchResultText(text));
        self.emit(RenderSignal::ClearButtonVisible(searching));
        self.emit(RenderSignal::NoResultsVisible(searching && count == 0));
    }

    fn close_lightbox(&mut self) {
        self.state.lightbox = LightboxState::Closed;
        self.transitions.cancel(VisualChannel::LightboxImage);
        self.emit(RenderSignal::LightboxOpacity(Opacity::Transparent));
        self.transitions.replace(
            VisualChannel::LightboxFrame,
            self.timing.close_fade,
            [RenderSignal::HideLightbox, RenderSignal::ScrollLocked(false)],
        );
        tracing::debug!("Lightbox closed");
    }
}
