//! Default keybindings
//!
//! This module defines the default keybindings that are used
//! when no user configuration is present.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========
    // No plain characters here: they must reach the search box

    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-c", Action::Quit);
    bind(&mut config.global, "C-r", Action::Reset);

    // ========== Grid ==========

    let grid = config.context.entry(KeyContext::Grid).or_default();
    bind(grid, "q", Action::Quit);
    bind(grid, "r", Action::Reset);
    bind(grid, "/", Action::FocusSearch);
    bind(grid, "x", Action::ClearSearch);
    bind(grid, "c", Action::NextCategory);
    bind(grid, "S-c", Action::PrevCategory);
    bind(grid, "<Tab>", Action::NextCategory);
    bind(grid, "<BackTab>", Action::PrevCategory);
    bind(grid, "S-<BackTab>", Action::PrevCategory);
    bind(grid, "f", Action::NextFilter);
    bind(grid, "S-f", Action::PrevFilter);
    bind(grid, "<Left>", Action::SelectLeft);
    bind(grid, "h", Action::SelectLeft);
    bind(grid, "<Right>", Action::SelectRight);
    bind(grid, "l", Action::SelectRight);
    bind(grid, "<Up>", Action::SelectUp);
    bind(grid, "k", Action::SelectUp);
    bind(grid, "<Down>", Action::SelectDown);
    bind(grid, "j", Action::SelectDown);
    bind(grid, "<CR>", Action::OpenSelected);
    bind(grid, "<Space>", Action::OpenSelected);

    // ========== Search ==========

    let search = config.context.entry(KeyContext::Search).or_default();
    bind(search, "<Esc>", Action::ExitSearch);
    bind(search, "<CR>", Action::ExitSearch);
    bind(search, "<BS>", Action::Backspace);
    bind(search, "C-h", Action::Backspace);
    bind(search, "C-w", Action::DeleteWordBack);
    bind(search, "M-<BS>", Action::DeleteWordBack);
    bind(search, "C-u", Action::ClearSearch);
    bind(search, "<Left>", Action::MoveCursorLeft);
    bind(search, "C-b", Action::MoveCursorLeft);
    bind(search, "<Right>", Action::MoveCursorRight);
    bind(search, "C-f", Action::MoveCursorRight);
    bind(search, "<Home>", Action::MoveCursorStart);
    bind(search, "C-a", Action::MoveCursorStart);
    bind(search, "<End>", Action::MoveCursorEnd);
    bind(search, "C-e", Action::MoveCursorEnd);

    // ========== Lightbox ==========

    let lightbox = config.context.entry(KeyContext::Lightbox).or_default();
    bind(lightbox, "<Esc>", Action::CloseLightbox);
    bind(lightbox, "q", Action::CloseLightbox);
    bind(lightbox, "<Left>", Action::PrevImage);
    bind(lightbox, "h", Action::PrevImage);
    bind(lightbox, "<Right>", Action::NextImage);
    bind(lightbox, "l", Action::NextImage);

    config
}
