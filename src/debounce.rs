//! debounce.rs — stability filter for a bouncing logical level

use embassy_time::{Duration, Instant};

use crate::sampler::ButtonState;

/// Rejects any level change that does not stay stable for the whole window.
///
/// Every sample that differs from the current candidate restarts the window,
/// so a bouncing contact keeps pushing its own acceptance out. The filter
/// only reports stability; promoting the stable level to the confirmed
/// button state is the caller's job.
pub struct Debouncer {
    window: Duration,
    candidate: ButtonState,
    candidate_since: Instant,
}

impl Debouncer {
    pub fn new(window: Duration, initial: ButtonState, now: Instant) -> Self {
        Self {
            window,
            candidate: initial,
            candidate_since: now,
        }
    }

    /// Feed one raw sample. Returns the level once it has been continuously
    /// stable for longer than the window, `None` while still settling.
    pub fn filter(&mut self, sample: ButtonState, now: Instant) -> Option<ButtonState> {
        if sample != self.candidate {
            self.candidate = sample;
            self.candidate_since = now;
            return None;
        }
        if now - self.candidate_since > self.window {
            Some(self.candidate)
        } else {
            None
        }
    }
}
