//! Deferred visual transitions.
//!
//! Fades are two-phase: something changes now, the rest lands after a fixed
//! delay. The delayed half is queued here and flushed to the surface when the
//! event loop advances the clock. Queued signals never touch view state.
//!
//! Each transition belongs to a [`VisualChannel`]. Scheduling on a channel
//! drops whatever was still pending on it, so the latest request wins.

use std::time::Duration;

use super::signal::RenderSignal;

/// Presentation target a deferred signal applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualChannel {
    Loading,
    Reveal(usize),
    /// Lightbox overlay (fade in/out, hide)
    LightboxFrame,
    /// Lightbox image (swap on navigation)
    LightboxImage,
}

/// Delays for every two-phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub open_fade: Duration,
    pub close_fade: Duration,
    pub swap_fade: Duration,
    pub loading: Duration,
    pub reveal_stagger: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            open_fade: Duration::from_millis(10),
            close_fade: Duration::from_millis(300),
            swap_fade: Duration::from_millis(150),
            loading: Duration::from_millis(1000),
            reveal_stagger: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Duration,
    seq: u64,
    channel: VisualChannel,
    signal: RenderSignal,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionQueue {
    /// Time advanced so far
    elapsed: Duration,
    next_seq: u64,
    pending: Vec<Scheduled>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel pending signals on `channel`, then queue `signals` after `delay`.
    pub fn replace(
        &mut self,
        channel: VisualChannel,
        delay: Duration,
        signals: impl IntoIterator<Item = RenderSignal>,
    ) {
        self.cancel(channel);
        for signal in signals {
            self.push(channel, delay, signal);
        }
    }

    /// Queue a signal without cancelling anything.
    pub fn push(&mut self, channel: VisualChannel, delay: Duration, signal: RenderSignal) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled {
            due: self.elapsed + delay,
            seq,
            channel,
            signal,
        });
    }

    pub fn cancel(&mut self, channel: VisualChannel) {
        let before = self.pending.len();
        self.pending.retain(|s| s.channel != channel);
        let dropped = before - self.pending.len();
        if dropped > 0 {
            tracing::debug!(?channel, dropped, "Superseded pending transition");
        }
    }

    /// Advance the clock and return every signal now due, in schedule order.
    pub fn advance(&mut self, dt: Duration) -> Vec<RenderSignal> {
        self.elapsed += dt;
        let now = self.elapsed;

        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|s| s.due <= now);
        self.pending = pending;

        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.signal).collect()
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn pending_on(&self, channel: VisualChannel) -> usize {
        self.pending.iter().filter(|s| s.channel == channel).count()
    }
}
