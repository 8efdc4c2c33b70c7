//! Gallery core: visibility rule, view state and lightbox controller.

pub mod controller;
mod error;
pub mod filter;
pub mod lightbox;
pub mod signal;
pub mod transition;

pub use controller::{Gallery, ViewState, DEFAULT_FILTER};
pub use error::GalleryError;
pub use filter::{normalize_query, recompute, CategoryFilter};
pub use lightbox::{counter_text, Direction, LightboxState};
pub use signal::{LightboxContent, Opacity, RecordingSurface, RenderSignal, RenderSurface};
pub use transition::{TransitionQueue, TransitionTiming, VisualChannel};
