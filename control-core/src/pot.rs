//! Potentiometer: raw analog pass-through.

use crate::hal::AnalogInput;

/// Rotary or slide potentiometer read without conditioning.
pub struct Pot<A> {
    pin: A,
}

impl<A: AnalogInput> Pot<A> {
    #[must_use]
    pub fn new(pin: A) -> Self {
        Self { pin }
    }

    /// Current raw sample.
    pub fn read(&mut self) -> u16 {
        self.pin.sample()
    }

    /// Release the pin.
    pub fn into_inner(self) -> A {
        self.pin
    }
}
