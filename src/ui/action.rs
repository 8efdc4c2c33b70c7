//! Actions that can be triggered by keybindings
//!
//! Each action is a single user intent. The app translates it into at most
//! one gallery operation (or a purely local UI change such as moving the
//! grid cursor).

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Reset category, search and visual filter
    Reset,

    // ========== Filters ==========
    /// Activate the next category button
    NextCategory,
    /// Activate the previous category button
    PrevCategory,
    /// Activate the next visual filter button
    NextFilter,
    /// Activate the previous visual filter button
    PrevFilter,

    // ========== Grid ==========
    /// Move the grid cursor
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    /// Open the lightbox on the focused tile
    OpenSelected,

    // ========== Search ==========
    /// Focus the search box
    FocusSearch,
    /// Leave the search box, keeping the query
    ExitSearch,
    /// Clear the search query
    ClearSearch,
    /// Delete character before cursor
    Backspace,
    /// Delete word before cursor
    DeleteWordBack,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,

    // ========== Lightbox ==========
    CloseLightbox,
    PrevImage,
    NextImage,
}

impl Action {
    /// Short label used in key hints
    pub fn label(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::Reset => "reset",
            Action::NextCategory => "category",
            Action::PrevCategory => "prev category",
            Action::NextFilter => "filter",
            Action::PrevFilter => "prev filter",
            Action::SelectLeft => "left",
            Action::SelectRight => "right",
            Action::SelectUp => "up",
            Action::SelectDown => "down",
            Action::OpenSelected => "open",
            Action::FocusSearch => "search",
            Action::ExitSearch => "done",
            Action::ClearSearch => "clear",
            Action::Backspace => "backspace",
            Action::DeleteWordBack => "delete word",
            Action::MoveCursorLeft => "cursor left",
            Action::MoveCursorRight => "cursor right",
            Action::MoveCursorStart => "line start",
            Action::MoveCursorEnd => "line end",
            Action::CloseLightbox => "close",
            Action::PrevImage => "prev",
            Action::NextImage => "next",
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        "quit" => Some(Action::Quit),
        "reset" => Some(Action::Reset),
        "next_category" => Some(Action::NextCategory),
        "prev_category" => Some(Action::PrevCategory),
        "next_filter" => Some(Action::NextFilter),
        "prev_filter" => Some(Action::PrevFilter),
        "select_left" => Some(Action::SelectLeft),
        "select_right" => Some(Action::SelectRight),
        "select_up" => Some(Action::SelectUp),
        "select_down" => Some(Action::SelectDown),
        "open_selected" | "open" => Some(Action::OpenSelected),
        "focus_search" | "search" => Some(Action::FocusSearch),
        "exit_search" => Some(Action::ExitSearch),
        "clear_search" => Some(Action::ClearSearch),
        "backspace" => Some(Action::Backspace),
        "delete_word_back" => Some(Action::DeleteWordBack),
        "move_cursor_left" => Some(Action::MoveCursorLeft),
        "move_cursor_right" => Some(Action::MoveCursorRight),
        "move_cursor_start" => Some(Action::MoveCursorStart),
        "move_cursor_end" => Some(Action::MoveCursorEnd),
        "close_lightbox" | "close" => Some(Action::CloseLightbox),
        "prev_image" | "prev" => Some(Action::PrevImage),
        "next_image" | "next" => Some(Action::NextImage),
        _ => None,
    }
}
