//! button.rs — debounced button with single, double and long press classification

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::config::ButtonConfig;
use crate::debounce::Debouncer;
use crate::latch::EdgeLatch;
use crate::sampler::{ButtonState, LatchSampler, PollingSampler, Sample};

/// Whether the press that just ended has been reported yet. A tagged enum
/// instead of a bare bool so future classification kinds stay unambiguous.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Classification {
    Unclassified,
    Classified,
}

/// Debounced push-button with press classification.
///
/// Feed it with [`tick`](Self::tick) from your main loop. Each tick runs the
/// sample/debounce/classify pipeline and synchronously invokes whichever
/// handlers are registered:
///
/// - `on_down` / `on_up` fire immediately on every debounce-confirmed
///   transition.
/// - On release, exactly one of `on_long_pressed(held)`,
///   `on_double_pressed(gap)` or `on_pressed(held)` fires per completed
///   press. A long press is reported right at release; a short press is
///   withheld for the double-press window so a second press can still pair
///   with it, then reported as a single press when the window expires.
///
/// Each slot holds at most one handler, the last registration wins. Handlers
/// run inside `tick()`; they must not block and must not drive this button
/// themselves.
///
/// In polling mode `tick()` must run at least twice per debounce window. In
/// interrupt mode edges are captured asynchronously by the [`EdgeLatch`], so
/// ticks may be spaced further apart. The classifier never advances between
/// ticks; stop ticking and it freezes.
pub struct Button<'a, S> {
    sampler: S,
    config: ButtonConfig,
    debouncer: Debouncer,
    /// Debounce-confirmed state; the only state notifications and timing
    /// bookkeeping ever see.
    state: ButtonState,
    time_entered_state: Instant,
    duration_in_previous_state: Duration,
    /// Most recent confirmed release, cleared once a double press consumed it.
    last_release: Option<Instant>,
    /// The release the current/just-ended press is measured against for
    /// double-press detection, frozen at the Down transition.
    gap_reference: Option<Instant>,
    classification: Classification,
    on_down_callback: Option<&'a mut (dyn FnMut() + 'a)>,
    on_up_callback: Option<&'a mut (dyn FnMut() + 'a)>,
    on_pressed_callback: Option<&'a mut (dyn FnMut(Duration) + 'a)>,
    on_double_pressed_callback: Option<&'a mut (dyn FnMut(Duration) + 'a)>,
    on_long_pressed_callback: Option<&'a mut (dyn FnMut(Duration) + 'a)>,
}

impl<'a, P> Button<'a, PollingSampler<P>>
where
    P: InputPin,
{
    /// Polling-mode button: every tick reads the pin, inverted per
    /// `config.polarity`. The pin must already be configured as an input
    /// with the pull matching the wiring.
    pub fn polling(pin: P, config: ButtonConfig) -> Self {
        Self::new(PollingSampler::new(pin, config.polarity), config)
    }
}

impl<'a> Button<'a, LatchSampler<'a>> {
    /// Interrupt-mode button: every tick reads the level last recorded in
    /// `latch`. Wire the latch into your platform's edge interrupt (or an
    /// embassy `wait_for_any_edge` task); see [`EdgeLatch`].
    pub fn interrupt_driven(latch: &'a EdgeLatch, config: ButtonConfig) -> Self {
        Self::new(LatchSampler::new(latch), config)
    }
}

impl<'a, S> Button<'a, S>
where
    S: Sample,
{
    /// Build a button over any level source. Starts released.
    pub fn new(sampler: S, config: ButtonConfig) -> Self {
        let now = Instant::now();
        Self {
            sampler,
            debouncer: Debouncer::new(config.debounce_window, ButtonState::Up, now),
            config,
            state: ButtonState::Up,
            time_entered_state: now,
            duration_in_previous_state: Duration::from_ticks(0),
            last_release: None,
            gap_reference: None,
            // nothing to report until the first press completes
            classification: Classification::Classified,
            on_down_callback: None,
            on_up_callback: None,
            on_pressed_callback: None,
            on_double_pressed_callback: None,
            on_long_pressed_callback: None,
        }
    }

    /// Advance the pipeline by one step. Never blocks.
    pub fn tick(&mut self) {
        let reading = self.sampler.sample();
        let now = Instant::now();

        if let Some(stable) = self.debouncer.filter(reading, now)
            && stable != self.state
        {
            self.duration_in_previous_state = now - self.time_entered_state;
            self.time_entered_state = now;
            self.state = stable;
            self.classification = Classification::Unclassified;

            match stable {
                ButtonState::Down => {
                    // Freeze the reference this press will be measured
                    // against; the marker itself may be consumed before the
                    // release is classified.
                    self.gap_reference = self.last_release;
                    if let Some(cb) = self.on_down_callback.as_mut() {
                        cb();
                    }
                }
                ButtonState::Up => {
                    self.last_release = Some(now);
                    if let Some(cb) = self.on_up_callback.as_mut() {
                        cb();
                    }
                }
            }
        }

        if self.state == ButtonState::Up && self.classification == Classification::Unclassified {
            self.classify_release(now);
        }
    }

    /// Resolve the just-ended press into exactly one of long, double or
    /// single. Runs once per tick while released and unreported.
    fn classify_release(&mut self, now: Instant) {
        let held = self.duration_in_previous_state;
        if held.as_ticks() == 0 {
            return;
        }

        if held >= self.config.long_press_threshold {
            self.classification = Classification::Classified;
            if let Some(cb) = self.on_long_pressed_callback.as_mut() {
                cb(held);
            }
            return;
        }

        if let Some(reference) = self.gap_reference {
            let gap = now - reference;
            if gap < self.config.double_press_window {
                self.classification = Classification::Classified;
                // a third rapid press must not pair with this one as well
                self.last_release = None;
                if let Some(cb) = self.on_double_pressed_callback.as_mut() {
                    cb(gap);
                }
                return;
            }
        }

        // Withhold the single press until a pairing second press can no
        // longer arrive.
        if now - self.time_entered_state >= self.config.double_press_window {
            self.classification = Classification::Classified;
            if let Some(cb) = self.on_pressed_callback.as_mut() {
                cb(held);
            }
        }
    }

    /// Called on every confirmed press-down transition.
    pub fn on_down(&mut self, handler: &'a mut (dyn FnMut() + 'a)) {
        self.on_down_callback = Some(handler);
    }

    /// Called on every confirmed release transition.
    pub fn on_up(&mut self, handler: &'a mut (dyn FnMut() + 'a)) {
        self.on_up_callback = Some(handler);
    }

    /// Called with the held duration when a press classifies as a single
    /// press, one double-press window after release.
    pub fn on_pressed(&mut self, handler: &'a mut (dyn FnMut(Duration) + 'a)) {
        self.on_pressed_callback = Some(handler);
    }

    /// Called with the gap since the previous release when two presses pair
    /// into a double press.
    pub fn on_double_pressed(&mut self, handler: &'a mut (dyn FnMut(Duration) + 'a)) {
        self.on_double_pressed_callback = Some(handler);
    }

    /// Called with the held duration when a press meets the long-press
    /// threshold, right at release.
    pub fn on_long_pressed(&mut self, handler: &'a mut (dyn FnMut(Duration) + 'a)) {
        self.on_long_pressed_callback = Some(handler);
    }

    /// Debounce-confirmed state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_down(&self) -> bool {
        self.state == ButtonState::Down
    }

    pub fn is_up(&self) -> bool {
        self.state == ButtonState::Up
    }

    /// How long the button has been in its current confirmed state.
    pub fn time_in_current_state(&self) -> Duration {
        Instant::now() - self.time_entered_state
    }

    /// How long the button spent in its previous confirmed state. After a
    /// release this is the length of the press that just ended.
    pub fn time_in_previous_state(&self) -> Duration {
        self.duration_in_previous_state
    }
}
