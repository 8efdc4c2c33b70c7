//! End-to-end gallery flows: catalog file -> controller -> surface.

use std::time::Duration;

use tempfile::TempDir;
use vitrine::gallery::Opacity;
use vitrine::{
    Catalog, Direction, Gallery, GalleryError, RecordingSurface, RenderSignal, TerminalSurface,
    TransitionTiming,
};

use super::common::fixtures::{
    catalog_with_categories, sample_catalog, write_json_catalog, write_toml_catalog,
};

fn recording(catalog: Catalog) -> Gallery<RecordingSurface> {
    Gallery::new(catalog, RecordingSurface::new(), TransitionTiming::default())
}

fn terminal(catalog: Catalog) -> Gallery<TerminalSurface> {
    let surface = TerminalSurface::new(catalog.len());
    Gallery::new(catalog, surface, TransitionTiming::default())
}

#[test]
fn test_toml_and_json_catalogs_agree() {
    let dir = TempDir::new().unwrap();
    let toml = Catalog::load(&write_toml_catalog(&dir)).unwrap();
    let json = Catalog::load(&write_json_catalog(&dir)).unwrap();
    assert_eq!(toml, json);
    assert_eq!(toml.categories(), vec!["nature", "city"]);
}

#[test]
fn test_category_scenario_counter_wraps() {
    let mut gallery = recording(catalog_with_categories(&["a", "a", "b", "a", "b"]));

    gallery.set_category("b").unwrap();
    assert_eq!(gallery.state().visible(), &[2, 4]);
    assert_eq!(gallery.selected_index(), 0);

    gallery.open(0).unwrap();
    assert_eq!(gallery.counter_text().as_deref(), Some("1 / 2"));

    gallery.navigate(Direction::Next).unwrap();
    assert_eq!(gallery.counter_text().as_deref(), Some("2 / 2"));

    gallery.navigate(Direction::Next).unwrap();
    assert_eq!(gallery.counter_text().as_deref(), Some("1 / 2"));

    // The surface sees the counter once the swap fade has elapsed
    gallery.advance(Duration::from_millis(150));
    assert_eq!(gallery.surface().last_counter(), Some("1 / 2"));
}

#[test]
fn test_search_then_category_narrows_in_catalog_order() {
    let mut gallery = recording(sample_catalog());

    gallery.set_query("  AT  ");
    // "Still water at dawn", "Crowded stalls at noon"
    assert_eq!(gallery.state().visible(), &[1, 4]);

    gallery.set_category("city").unwrap();
    assert_eq!(gallery.state().visible(), &[4]);
    assert_eq!(gallery.state().query(), "at");

    let titles: Vec<&str> = gallery
        .visible_items()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Old Market"]);
}

#[test]
fn test_terminal_surface_tracks_visible_set() {
    let mut gallery = terminal(sample_catalog());
    gallery.start();

    gallery.set_category("nature").unwrap();
    assert_eq!(gallery.surface().shown_positions(), gallery.state().visible());

    gallery.set_query("dunes");
    assert_eq!(gallery.surface().shown_positions(), vec![3]);

    gallery.set_query("");
    gallery.set_category("all").unwrap();
    assert_eq!(gallery.surface().shown_positions(), vec![0, 1, 2, 3, 4]);
    assert_eq!(gallery.surface().active_category(), "all");
}

#[test]
fn test_lightbox_fades_on_terminal_surface() {
    let mut gallery = terminal(sample_catalog());
    gallery.open(2).unwrap();

    let view = gallery.surface().lightbox().unwrap();
    assert_eq!(view.content.title, "Night Bridge");
    assert_eq!(view.frame, Opacity::Transparent);
    assert!(gallery.surface().is_scroll_locked());

    gallery.advance(Duration::from_millis(10));
    assert_eq!(gallery.surface().lightbox().unwrap().frame, Opacity::Opaque);

    gallery.navigate(Direction::Prev).unwrap();
    let view = gallery.surface().lightbox().unwrap();
    assert_eq!(view.image, Opacity::Transparent);
    assert_eq!(view.content.title, "Night Bridge");

    gallery.advance(Duration::from_millis(150));
    let view = gallery.surface().lightbox().unwrap();
    assert_eq!(view.image, Opacity::Opaque);
    assert_eq!(view.content.title, "Lake Mirror");
    assert_eq!(view.counter, "2 / 5");

    gallery.close().unwrap();
    // Still on screen while fading out
    assert!(gallery.surface().lightbox().is_some());
    gallery.advance(Duration::from_millis(300));
    assert!(gallery.surface().lightbox().is_none());
    assert!(!gallery.surface().is_scroll_locked());
}

#[test]
fn test_filter_change_while_open_keeps_lightbox() {
    let mut gallery = terminal(sample_catalog());
    gallery.set_category("city").unwrap();
    gallery.open(1).unwrap();

    gallery.set_visual_filter("sepia");
    assert!(gallery.is_open());
    assert_eq!(gallery.selected_index(), 1);
    assert!(gallery
        .surface()
        .tiles()
        .iter()
        .all(|tile| tile.filter == "sepia"));
}

#[test]
fn test_query_change_while_open_closes_lightbox() {
    let mut gallery = recording(sample_catalog());
    gallery.open(3).unwrap();
    gallery.surface_mut().clear();

    gallery.set_query("lake");
    assert!(!gallery.is_open());
    assert_eq!(gallery.navigate(Direction::Next), Err(GalleryError::LightboxClosed));
    assert!(gallery
        .surface()
        .signals
        .contains(&RenderSignal::LightboxOpacity(Opacity::Transparent)));
}

#[test]
fn test_empty_result_set_rejects_lightbox() {
    let mut gallery = recording(sample_catalog());
    gallery.set_query("aurora");
    assert_eq!(gallery.visible_len(), 0);
    assert_eq!(gallery.open(0), Err(GalleryError::EmptyVisibleSet));
    assert!(gallery
        .surface()
        .signals
        .contains(&RenderSignal::NoResultsVisible(true)));
}
