mod button_bar;
mod gallery_grid;
mod key_hints;
mod lightbox_view;
mod search_bar;
mod text_input;
pub mod theme;

pub use button_bar::ButtonBar;
pub use gallery_grid::{GalleryGrid, GridLayout};
pub use key_hints::{hints_for, render_key_hints, KeyHintBarStyle};
pub use lightbox_view::{hit_test as lightbox_hit_test, panel_rect, LightboxHit, LightboxOverlay};
pub use search_bar::{SearchBar, SearchHit};
pub use text_input::TextInputState;
