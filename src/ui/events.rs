/// Input mode for the application
///
/// The lightbox is not a mode here: whether it is open is gallery state,
/// and an open lightbox overrides either mode for key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Moving around the tile grid
    #[default]
    Browsing,
    /// Typing in the search box
    Searching,
}
