//! latch.rs — single-word edge latch shared with interrupt context

use portable_atomic::{AtomicBool, Ordering};

use crate::sampler::ButtonState;

/// Latched logical level written by edge-interrupt handlers and read once
/// per `tick()`.
///
/// This is the single word shared between interrupt context (writer) and the
/// tick context (reader); the atomic makes the word-sized access safe on
/// targets without guaranteed single-word atomicity and keeps it from being
/// cached or reordered. No other button state is touched from interrupt
/// context.
///
/// `EdgeLatch::new()` is `const`, so the latch can live in a `static` and be
/// poked from a raw ISR, or from an embassy task looping on
/// `wait_for_any_edge`. Polarity is resolved by the wiring: attach whichever
/// physical edge means "pressed" (falling for a button that pulls to ground)
/// to [`edge_down`](Self::edge_down) and the opposite edge to
/// [`edge_up`](Self::edge_up). The latch itself only stores logical Down/Up.
pub struct EdgeLatch {
    /// true = Down (pressed).
    down: AtomicBool,
}

impl EdgeLatch {
    /// New latch, released.
    pub const fn new() -> Self {
        Self {
            down: AtomicBool::new(false),
        }
    }

    /// Record a "pressed" edge. Writes only when the level actually changes;
    /// repeated edges of the same direction are dropped. This is not a
    /// debounce, the filter downstream still applies.
    pub fn edge_down(&self) {
        if !self.down.load(Ordering::Acquire) {
            self.down.store(true, Ordering::Release);
        }
    }

    /// Record a "released" edge. Same idempotency as [`edge_down`](Self::edge_down).
    pub fn edge_up(&self) {
        if self.down.load(Ordering::Acquire) {
            self.down.store(false, Ordering::Release);
        }
    }

    /// The most recently latched logical level.
    pub fn level(&self) -> ButtonState {
        if self.down.load(Ordering::Acquire) {
            ButtonState::Down
        } else {
            ButtonState::Up
        }
    }
}

impl Default for EdgeLatch {
    fn default() -> Self {
        Self::new()
    }
}
