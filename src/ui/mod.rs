pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod input;
pub mod surface;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use events::InputMode;
pub use surface::TerminalSurface;
