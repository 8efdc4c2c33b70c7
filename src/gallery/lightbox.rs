//! Lightbox open/closed state and circular navigation.

use std::fmt;

/// Navigation direction inside the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Step `index` one place in a ring of `len` items.
    ///
    /// Returns `None` for an empty ring instead of taking a modulo of zero.
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match self {
            Direction::Next => (index + 1) % len,
            Direction::Prev => (index + len - 1) % len,
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => write!(f, "prev"),
            Direction::Next => write!(f, "next"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open,
}

impl LightboxState {
    pub fn is_open(self) -> bool {
        self == LightboxState::Open
    }
}

/// Counter text shown in the lightbox, e.g. `2 / 5`
pub fn counter_text(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}
