//! Momentary push button on a pull-up input.

use crate::debounce::Debouncer;
use crate::hal::{Clock, DigitalInput};

/// Debounced push button that reports one click per press.
///
/// The pin must already be configured as a pull-up input: the button rests
/// high and a press pulls it low.
pub struct Button<P, C> {
    pin: P,
    clock: C,
    debouncer: Debouncer,
}

impl<P: DigitalInput, C: Clock> Button<P, C> {
    /// Create a button; the debounce timer starts now.
    #[must_use]
    pub fn new(pin: P, clock: C) -> Self {
        let debouncer = Debouncer::new(clock.now_ms());
        Self {
            pin,
            clock,
            debouncer,
        }
    }

    /// Create a button with a custom debounce window.
    #[must_use]
    pub fn with_window(pin: P, clock: C, window_ms: u64) -> Self {
        let debouncer = Debouncer::new(clock.now_ms()).with_window(window_ms);
        Self {
            pin,
            clock,
            debouncer,
        }
    }

    /// Poll the button. Returns `true` once per debounced press.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_ms();
        let clicked = self.debouncer.poll(&mut self.pin, now);
        #[cfg(feature = "defmt")]
        if clicked {
            defmt::debug!("Button clicked at {} ms", now);
        }
        clicked
    }

    /// Get a reference to the debounce state.
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Decompose the button into its pin and clock.
    pub fn into_parts(self) -> (P, C) {
        (self.pin, self.clock)
    }
}
