//! Debounced push-button driver with single, double and long press
//! classification. Platform-agnostic: bring an `embedded-hal` input pin (or
//! wire an [`EdgeLatch`] into your edge interrupt) and an `embassy-time`
//! driver, then call [`Button::tick`] from your main loop.
#![no_std]

mod button;
mod config;
mod debounce;
mod latch;
mod sampler;

pub use button::*;
pub use config::*;
pub use debounce::*;
pub use latch::*;
pub use sampler::*;
