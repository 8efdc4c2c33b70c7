pub mod catalog;
pub mod config;
pub mod gallery;
pub mod listing;
pub mod ui;
pub mod util;

pub use catalog::{Catalog, CatalogError, Item, ItemEntry};
pub use config::{Config, ConfigError};
pub use gallery::{
    Direction, Gallery, GalleryError, RecordingSurface, RenderSignal, RenderSurface,
    TransitionTiming, ViewState,
};
pub use listing::render_listing;
pub use ui::{App, TerminalSurface};
