//! sampler.rs — logical level sources for the classifier

use embedded_hal::digital::InputPin;

use crate::config::Polarity;
use crate::latch::EdgeLatch;

/// Logical button level. `Down` always means "pressed", whichever way the
/// circuit is wired; polarity inversion happens in the sampler.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Up,
    Down,
}

/// Source of one logical level reading per tick.
///
/// The classifier is generic over this seam, so it runs the same against a
/// live GPIO pin, an interrupt-fed [`EdgeLatch`], or a scripted fake in
/// tests. Sampling must have no side effects beyond the read.
pub trait Sample {
    fn sample(&mut self) -> ButtonState;
}

/// Polling sampler: reads the physical pin level every tick.
///
/// With [`Polarity::ActiveLow`] a LOW pin reads as pressed, so `Down` keeps
/// meaning "pressed" regardless of wiring.
pub struct PollingSampler<P> {
    pin: P,
    polarity: Polarity,
}

impl<P> PollingSampler<P>
where
    P: InputPin,
{
    /// Caller must configure the pin as an input with the pull matching the
    /// wiring (pull-up for active-low) before calling this.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Release the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> Sample for PollingSampler<P>
where
    P: InputPin,
{
    fn sample(&mut self) -> ButtonState {
        // A failed read counts as "not pressed"; real GPIO pins are infallible.
        let pressed = match self.polarity {
            Polarity::ActiveLow => self.pin.is_low().unwrap_or(false),
            Polarity::ActiveHigh => self.pin.is_high().unwrap_or(false),
        };
        if pressed {
            ButtonState::Down
        } else {
            ButtonState::Up
        }
    }
}

/// Interrupt-mode sampler: reads the level last latched by the edge
/// handlers, never the pin. Ticks can therefore be spaced further apart
/// than in polling mode since edges are captured asynchronously.
pub struct LatchSampler<'a> {
    latch: &'a EdgeLatch,
}

impl<'a> LatchSampler<'a> {
    pub fn new(latch: &'a EdgeLatch) -> Self {
        Self { latch }
    }
}

impl Sample for LatchSampler<'_> {
    fn sample(&mut self) -> ButtonState {
        self.latch.level()
    }
}
