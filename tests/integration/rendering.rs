//! Full-screen rendering and mouse handling through the App.
//!
//! Layout at 80x24 with the default 28x7 tiles: category bar on row 1,
//! search box on rows 2-4, filter bar on row 5, status on row 6, the grid
//! from row 7 (two tiles per row) and key hints on row 23. The lightbox
//! panel covers columns 10..70 and rows 3..21.

use std::time::Duration;

use crossterm::event::KeyCode;
use vitrine::{App, Config};

use super::common::fixtures::sample_catalog;
use super::common::terminal::{
    buffer_contains, create_test_terminal, draw, key, left_down, left_up, row_text, scroll_down,
};

fn loaded_app() -> App {
    let mut app = App::new(sample_catalog(), Config::default());
    app.tick(Duration::from_secs(2));
    app
}

#[test]
fn test_loading_then_reveal() {
    let mut terminal = create_test_terminal();
    let mut app = App::new(sample_catalog(), Config::default());

    let buffer = draw(&mut terminal, &mut app);
    assert!(buffer_contains(&buffer, "Loading gallery..."));
    assert!(!buffer_contains(&buffer, "Misty Forest"));

    app.tick(Duration::from_secs(2));
    let buffer = draw(&mut terminal, &mut app);
    assert!(!buffer_contains(&buffer, "Loading gallery..."));
    assert!(buffer_contains(&buffer, "Misty Forest"));
    assert!(buffer_contains(&buffer, "Lake Mirror"));
    assert!(row_text(&buffer, 0).contains("5 of 5 images"));
}

#[test]
fn test_bars_and_footer() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    let buffer = draw(&mut terminal, &mut app);

    let categories = row_text(&buffer, 1);
    assert!(categories.contains(" All "));
    assert!(categories.contains(" nature "));
    assert!(categories.contains(" city "));

    let filters = row_text(&buffer, 5);
    assert!(filters.starts_with("Filter: "));
    assert!(filters.contains(" Sepia "));

    let footer = row_text(&buffer, 23);
    assert!(footer.contains("open"));
    assert!(footer.contains("quit"));
}

#[test]
fn test_search_shows_result_count_and_no_results() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();

    app.handle_event(key(KeyCode::Char('/')));
    for c in "lake".chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
    let buffer = draw(&mut terminal, &mut app);
    assert!(buffer_contains(&buffer, "Found 1 result for \"lake\""));
    assert!(buffer_contains(&buffer, "Lake Mirror"));
    assert!(!buffer_contains(&buffer, "Misty Forest"));
    assert!(row_text(&buffer, 0).contains("1 of 5 images"));

    for c in "zzz".chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
    let buffer = draw(&mut terminal, &mut app);
    assert!(buffer_contains(&buffer, "No images match your search."));
    assert!(buffer_contains(&buffer, "[x]"));
}

#[test]
fn test_click_category_button() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    draw(&mut terminal, &mut app);

    // " All " spans 0..5, " nature " 6..14, " city " 15..21
    app.handle_event(left_down(17, 1));
    assert_eq!(app.gallery().state().category().as_str(), "city");
    assert_eq!(app.gallery().state().visible(), &[2, 4]);

    let buffer = draw(&mut terminal, &mut app);
    assert!(buffer_contains(&buffer, "Night Bridge"));
    assert!(!buffer_contains(&buffer, "Lake Mirror"));
}

#[test]
fn test_click_filter_button() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    draw(&mut terminal, &mut app);

    // "Filter: " then " None " 8..14, " Grayscale " 15..26, " Sepia " 27..34
    app.handle_event(left_down(29, 5));
    assert_eq!(app.gallery().state().visual_filter(), "sepia");
    assert_eq!(app.gallery().surface().active_filter(), "sepia");
}

#[test]
fn test_click_tile_opens_lightbox_with_counter() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    draw(&mut terminal, &mut app);

    // Second tile of the second row: slot 3
    app.handle_event(left_down(35, 16));
    assert!(app.gallery().is_open());
    assert_eq!(app.gallery().selected_index(), 3);

    app.tick(Duration::from_millis(16));
    let buffer = draw(&mut terminal, &mut app);
    assert!(buffer_contains(&buffer, "Desert Dunes"));
    assert!(buffer_contains(&buffer, "4 / 5"));
    assert!(buffer_contains(&buffer, "Wind-carved sand"));
}

#[test]
fn test_backdrop_click_closes_lightbox() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    draw(&mut terminal, &mut app);

    app.handle_event(key(KeyCode::Enter));
    assert!(app.gallery().is_open());
    draw(&mut terminal, &mut app);

    // Inside the panel: nothing happens
    app.handle_event(left_down(40, 12));
    app.handle_event(left_up(40, 12));
    assert!(app.gallery().is_open());

    app.handle_event(left_down(2, 1));
    assert!(!app.gallery().is_open());

    app.tick(Duration::from_millis(300));
    let buffer = draw(&mut terminal, &mut app);
    assert!(!buffer_contains(&buffer, "1 / 5"));
}

#[test]
fn test_swipe_navigates_past_threshold_only() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    draw(&mut terminal, &mut app);
    app.handle_event(key(KeyCode::Enter));

    // Leftward drag of 15 columns: next
    app.handle_event(left_down(40, 12));
    app.handle_event(left_up(25, 12));
    assert_eq!(app.gallery().selected_index(), 1);

    // Rightward drag of exactly the threshold: ignored
    app.handle_event(left_down(30, 12));
    app.handle_event(left_up(40, 12));
    assert_eq!(app.gallery().selected_index(), 1);

    // Rightward drag of 11 columns: previous
    app.handle_event(left_down(30, 12));
    app.handle_event(left_up(41, 12));
    assert_eq!(app.gallery().selected_index(), 0);
}

#[test]
fn test_keyboard_navigation_renders_swapped_image() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    draw(&mut terminal, &mut app);

    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.gallery().counter_text().as_deref(), Some("5 / 5"));

    // Old image until the swap fade has run
    let buffer = draw(&mut terminal, &mut app);
    assert!(buffer_contains(&buffer, "1 / 5"));

    app.tick(Duration::from_millis(150));
    let buffer = draw(&mut terminal, &mut app);
    assert!(buffer_contains(&buffer, "5 / 5"));
    assert!(buffer_contains(&buffer, "Crowded stalls at noon"));
}

#[test]
fn test_scroll_is_locked_while_lightbox_open() {
    let mut terminal = create_test_terminal();
    let mut app = loaded_app();
    draw(&mut terminal, &mut app);

    app.handle_event(scroll_down(10, 10));
    assert_eq!(app.cursor(), 2);

    app.handle_event(key(KeyCode::Enter));
    app.handle_event(scroll_down(10, 10));
    assert_eq!(app.gallery().selected_index(), 2);
    assert_eq!(app.cursor(), 2);
}
