//! Collaborator traits implemented by the host platform.
//!
//! The core never touches registers. Each device wrapper is generic over
//! these traits, so the same conditioning code runs against real pins on a
//! microcontroller and against scripted mocks on the host.
//!
//! Pin configuration (pull-up input, analog input) happens when the
//! platform pin is constructed, before it is handed to the core.

use embedded_hal::digital::InputPin;

use crate::types::RESTING_LEVEL;

/// Instantaneous digital level of a pin.
pub trait DigitalInput {
    /// Read the current level. `true` is high.
    fn is_high(&mut self) -> bool;
}

/// Instantaneous analog sample of a pin.
pub trait AnalogInput {
    /// Read one raw sample in `[0, full_scale]` of the converter.
    fn sample(&mut self) -> u16;
}

/// Monotonic millisecond clock.
///
/// The counter may wrap; consumers compute elapsed time with wrapping
/// subtraction.
pub trait Clock {
    /// Milliseconds since boot.
    fn now_ms(&self) -> u64;
}

impl<T: DigitalInput + ?Sized> DigitalInput for &mut T {
    #[inline]
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    #[inline]
    fn sample(&mut self) -> u16 {
        (**self).sample()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    #[inline]
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Adapter from an `embedded-hal` 1.0 input pin to [`DigitalInput`].
///
/// A failed read reports the resting level, so a faulty pin can never
/// produce a press.
pub struct HalInput<P> {
    pin: P,
}

impl<P: InputPin> HalInput<P> {
    /// Wrap an already configured input pin.
    #[must_use]
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Get a reference to the wrapped pin.
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Release the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> DigitalInput for HalInput<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Digital read failed, assuming resting level");
                RESTING_LEVEL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    // embedded-hal pin that either reports a fixed level or fails
    struct MockHalPin {
        level: Option<bool>,
    }

    impl ErrorType for MockHalPin {
        type Error = PinFault;
    }

    impl InputPin for MockHalPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.level.ok_or(PinFault)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.level.map(|l| !l).ok_or(PinFault)
        }
    }

    #[test]
    fn test_hal_input_passes_level_through() {
        let mut high = HalInput::new(MockHalPin { level: Some(true) });
        let mut low = HalInput::new(MockHalPin { level: Some(false) });
        assert!(high.is_high());
        assert!(!low.is_high());
    }

    #[test]
    fn test_hal_input_error_reads_as_resting() {
        let mut faulty = HalInput::new(MockHalPin { level: None });
        assert_eq!(faulty.is_high(), RESTING_LEVEL);
    }

    #[test]
    fn test_hal_input_into_inner() {
        let input = HalInput::new(MockHalPin { level: Some(false) });
        assert_eq!(input.pin().level, Some(false));
        assert_eq!(input.into_inner().level, Some(false));
    }
}
