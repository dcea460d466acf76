//! config.rs — button wiring and timing configuration

use embassy_time::Duration;

/// How the button is wired to the pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Button connects the pin to ground when pressed (pin reads LOW when
    /// pressed, wants an internal pull-up). This is the common wiring.
    ActiveLow,
    /// Button connects the pin to supply when pressed (pin reads HIGH when
    /// pressed, wants an internal pull-down).
    ActiveHigh,
}

/// Timing and polarity configuration, immutable once the button is built.
///
/// The defaults match typical tactile switches: 25 ms debounce, 800 ms
/// long-press threshold, 300 ms double-press window, active-low wiring.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// How long a raw level must stay stable before it is accepted as the
    /// confirmed button state.
    pub debounce_window: Duration,
    /// Minimum held duration for a press to classify as a long press.
    pub long_press_threshold: Duration,
    /// Maximum gap after a release within which a second press pairs into a
    /// double press. A lone press is not reported until this window expires.
    pub double_press_window: Duration,
    /// Wiring polarity, used by the polling sampler to turn the raw pin
    /// level into a logical pressed/released reading.
    pub polarity: Polarity,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(25),
            long_press_threshold: Duration::from_millis(800),
            double_press_window: Duration::from_millis(300),
            polarity: Polarity::ActiveLow,
        }
    }
}

impl ButtonConfig {
    pub fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    pub fn with_long_press_threshold(mut self, threshold: Duration) -> Self {
        self.long_press_threshold = threshold;
        self
    }

    pub fn with_double_press_window(mut self, window: Duration) -> Self {
        self.double_press_window = window;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}
