//! Plain-text listing of the visible set, for `vitrine --list`.
//!
//! Runs the same gallery operations as the TUI against a surface that only
//! keeps the search summary, so the listing and the interactive view always
//! agree on what is visible.

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::gallery::{Gallery, GalleryError, RenderSignal, RenderSurface, TransitionTiming};

pub const NO_RESULTS_MESSAGE: &str = "No images match your search.";

#[derive(Debug, Default)]
struct SummarySurface {
    result_text: Option<String>,
    no_results: bool,
}

impl RenderSurface for SummarySurface {
    fn apply(&mut self, signal: RenderSignal) {
        match signal {
            RenderSignal::SearchResultText(text) => self.result_text = text,
            RenderSignal::NoResultsVisible(shown) => self.no_results = shown,
            _ => {}
        }
    }
}

/// Render the items visible for `category` and `query`, one per line, with
/// the result count and no-results message the search box would show.
pub fn render_listing(
    catalog: Catalog,
    category: Option<&str>,
    query: Option<&str>,
) -> Result<String, GalleryError> {
    let mut gallery = Gallery::new(catalog, SummarySurface::default(), TransitionTiming::default());
    if let Some(category) = category {
        gallery.set_category(category)?;
    }
    if let Some(query) = query {
        gallery.set_query(query);
    }

    let mut out = String::new();
    if let Some(text) = &gallery.surface().result_text {
        let _ = writeln!(out, "{}", text);
    }
    for (index, item) in gallery.visible_items().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. [{}] {}  {}",
            index + 1,
            item.category,
            item.title,
            item.image_ref
        );
        if !item.description.is_empty() {
            let _ = writeln!(out, "     {}", item.description);
        }
    }
    if gallery.surface().no_results {
        let _ = writeln!(out, "{}", NO_RESULTS_MESSAGE);
    }
    Ok(out)
}
