//! Input adapters: translate one user gesture into one gallery operation.
//!
//! Guards live here as well as in the core. The core rejects bad calls with a
//! [`GalleryError`]; adapters avoid making them in the first place, so an
//! empty grid or a closed lightbox simply ignores the gesture.

use crate::gallery::{Direction, Gallery, GalleryError, RenderSurface};

/// Tracks a mouse drag inside the lightbox and turns it into a navigation
/// direction once released.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    /// Minimum horizontal travel, exclusive, in terminal columns
    threshold: u16,
    start: Option<u16>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Remember where the drag started
    pub fn begin(&mut self, column: u16) {
        self.start = Some(column);
    }

    /// Finish the drag at `column`.
    ///
    /// A leftward drag longer than the threshold means "next", a rightward
    /// one means "previous". Shorter drags, and releases without a recorded
    /// start, yield nothing.
    pub fn end(&mut self, column: u16) -> Option<Direction> {
        let start = self.start.take()?;
        let diff = i32::from(start) - i32::from(column);
        if diff.unsigned_abs() <= u32::from(self.threshold) {
            return None;
        }
        if diff > 0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Prev)
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Open the lightbox on a tile of the visible set.
///
/// Returns `false` without touching the gallery when there is nothing to
/// open at `index`.
pub fn open_tile<S: RenderSurface>(gallery: &mut Gallery<S>, index: usize) -> bool {
    if index >= gallery.visible_len() {
        return false;
    }
    accepted(gallery.open(index))
}

/// Step the open lightbox. Ignored while closed or when nothing is visible.
pub fn step_lightbox<S: RenderSurface>(gallery: &mut Gallery<S>, direction: Direction) -> bool {
    if !gallery.is_open() || gallery.visible_len() == 0 {
        return false;
    }
    accepted(gallery.navigate(direction))
}

/// Close the lightbox if it is open.
pub fn close_lightbox<S: RenderSurface>(gallery: &mut Gallery<S>) -> bool {
    if !gallery.is_open() {
        return false;
    }
    accepted(gallery.close())
}

fn accepted<T>(result: Result<T, GalleryError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Gallery rejected input");
            false
        }
    }
}

/// Index of the entry after (or before) `current` in a list of `len`
/// buttons, wrapping around. Used by the category and filter cycle keys.
pub fn cycle(current: usize, len: usize, direction: Direction) -> usize {
    direction.step(current, len).unwrap_or(0)
}
