//! Shared UI colors and the terminal rendition of visual filter tokens.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 175, 239);
pub const ACCENT_WARNING: Color = Color::Rgb(229, 192, 123);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);
pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 120);
pub const TEXT_FAINT: Color = Color::Rgb(80, 80, 80);

pub const BORDER_DEFAULT: Color = Color::Rgb(70, 70, 70);
pub const BORDER_FOCUSED: Color = ACCENT_PRIMARY;

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const BUTTON_BG: Color = Color::Rgb(35, 35, 35);
pub const BUTTON_ACTIVE_BG: Color = Color::Rgb(60, 90, 120);

pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);

pub const BACKDROP_BG: Color = Color::Rgb(10, 10, 10);
pub const LIGHTBOX_BG: Color = Color::Rgb(28, 28, 32);

/// Base color of an item's image swatch
pub const SWATCH: Color = Color::Rgb(86, 156, 214);

/// Style the image swatch of a tile or the lightbox is drawn with.
///
/// Tokens are opaque to the gallery; this is just how the terminal shows
/// them. Unknown tokens render unfiltered.
pub fn filter_style(token: &str) -> Style {
    match token {
        "grayscale" => Style::default().fg(Color::Gray),
        "sepia" => Style::default().fg(Color::Rgb(162, 128, 89)),
        "blur" => Style::default().fg(SWATCH).add_modifier(Modifier::DIM),
        "brightness" => Style::default()
            .fg(Color::Rgb(150, 205, 255))
            .add_modifier(Modifier::BOLD),
        "contrast" => Style::default().fg(Color::White).bg(Color::Black),
        "hue-rotate" => Style::default().fg(Color::Rgb(214, 86, 156)),
        "invert" => Style::default().fg(SWATCH).add_modifier(Modifier::REVERSED),
        _ => Style::default().fg(SWATCH),
    }
}

/// Swatch glyph for a filter token, so filters stay distinguishable on
/// terminals without true color.
pub fn filter_glyph(token: &str) -> char {
    match token {
        "blur" => '░',
        "grayscale" | "sepia" => '▒',
        "contrast" | "brightness" => '█',
        _ => '▓',
    }
}
