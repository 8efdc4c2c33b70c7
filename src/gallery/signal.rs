//! Render signals emitted by the gallery core.
//!
//! The core never draws anything. It describes presentation changes as
//! [`RenderSignal`]s and hands them to a [`RenderSurface`], which owns the
//! actual widgets (terminal cells, a plain-text summary, a test recorder).

use crate::catalog::Item;

/// Two-phase fade states used by lightbox transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opacity {
    Transparent,
    #[default]
    Opaque,
}

/// What the lightbox shows for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxContent {
    /// Catalog position of the displayed item
    pub position: usize,
    pub image_ref: String,
    pub title: String,
    pub description: String,
}

impl LightboxContent {
    pub fn from_item(item: &Item) -> Self {
        Self {
            position: item.position,
            image_ref: item.image_ref.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderSignal {
    /// Show or hide a catalog item in the grid
    ItemVisibility { position: usize, visible: bool },
    /// Play the entrance animation on a (newly) visible item
    ItemEntrance { position: usize },
    /// Staggered reveal after the loading phase
    ItemRevealed { position: usize },
    LoadingVisible(bool),
    /// Apply a visual filter token to one item's image
    ImageFilter { position: usize, token: String },
    ActiveCategory(String),
    ActiveFilter(String),
    /// Display the lightbox with content and counter text
    ShowLightbox {
        content: LightboxContent,
        counter: String,
    },
    /// Replace the lightbox content while it stays open
    SwapLightboxContent(LightboxContent),
    LightboxOpacity(Opacity),
    LightboxImageOpacity(Opacity),
    HideLightbox,
    /// Lock background scrolling while the lightbox is shown
    ScrollLocked(bool),
    CounterText(String),
    /// Result count line; `None` hides it
    SearchResultText(Option<String>),
    NoResultsVisible(bool),
    ClearButtonVisible(bool),
}

/// Consumer of render signals.
pub trait RenderSurface {
    fn apply(&mut self, signal: RenderSignal);
}

/// Surface that records every signal, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub signals: Vec<RenderSignal>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded signals
    pub fn take(&mut self) -> Vec<RenderSignal> {
        std::mem::take(&mut self.signals)
    }

    pub fn clear(&mut self) {
        self.signals.clear();
    }

    /// Last counter text shown, whether via `ShowLightbox` or `CounterText`
    pub fn last_counter(&self) -> Option<&str> {
        self.signals.iter().rev().find_map(|signal| match signal {
            RenderSignal::ShowLightbox { counter, .. } => Some(counter.as_str()),
            RenderSignal::CounterText(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, signal: RenderSignal) {
        self.signals.push(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_counter_prefers_latest_signal() {
        let mut surface = RecordingSurface::new();
        surface.apply(RenderSignal::ShowLightbox {
            content: LightboxContent {
                position: 0,
                image_ref: "a.jpg".into(),
                title: "A".into(),
                description: String::new(),
            },
            counter: "1 / 3".into(),
        });
        assert_eq!(surface.last_counter(), Some("1 / 3"));

        surface.apply(RenderSignal::CounterText("2 / 3".into()));
        assert_eq!(surface.last_counter(), Some("2 / 3"));
    }

}
