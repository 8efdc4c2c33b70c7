//! Shared test utilities for vitrine
//!
//! - Catalog fixtures (in memory and on disk)
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
