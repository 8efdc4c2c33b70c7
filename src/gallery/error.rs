use thiserror::Error;

/// Rejected gallery operations.
///
/// These are caller contract violations: input adapters are expected to
/// guard against them, and the controller refuses them instead of clamping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("No visible items")]
    EmptyVisibleSet,
    #[error("Index {index} out of range for {len} visible items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Lightbox is not open")]
    LightboxClosed,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
