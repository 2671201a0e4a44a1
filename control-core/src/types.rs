//! Core value types: AdcScale, OutputRange, JoystickReading.

/// Resting level of a pull-up input (not pressed).
pub const RESTING_LEVEL: bool = true;

/// Active level of a pull-up input (pressed, line pulled low).
pub const ACTIVE_LEVEL: bool = false;

/// Electrical range of an analog-to-digital converter.
///
/// Samples are expected in `[0, full_scale]`, with the nominal center of a
/// resting control at `full_scale / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcScale {
    pub full_scale: u16,
}

impl AdcScale {
    /// 10-bit converter (AVR-class boards), center 512.
    pub const TEN_BIT: Self = Self { full_scale: 1024 };

    /// 12-bit converter (RP2040, STM32), center 2048.
    pub const TWELVE_BIT: Self = Self { full_scale: 4096 };

    #[must_use]
    pub const fn new(full_scale: u16) -> Self {
        Self { full_scale }
    }

    /// Nominal center sample.
    #[inline]
    #[must_use]
    pub const fn center(self) -> u16 {
        self.full_scale / 2
    }

    /// Clamp a raw sample into the converter range.
    #[inline]
    #[must_use]
    pub const fn clamp(self, sample: u16) -> u16 {
        if sample > self.full_scale {
            self.full_scale
        } else {
            sample
        }
    }
}

impl Default for AdcScale {
    fn default() -> Self {
        Self::TEN_BIT
    }
}

/// Target range of a calibrated axis value.
///
/// `lower` may exceed `upper`; the mapping is then mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputRange {
    pub lower: i16,
    pub upper: i16,
}

impl OutputRange {
    /// Symmetric 8-bit-plus-sign range used when nothing else is requested.
    pub const DEFAULT: Self = Self {
        lower: -255,
        upper: 255,
    };

    #[must_use]
    pub const fn new(lower: i16, upper: i16) -> Self {
        Self { lower, upper }
    }

    /// Smaller of the two bounds.
    #[inline]
    #[must_use]
    pub const fn min(self) -> i16 {
        if self.lower < self.upper {
            self.lower
        } else {
            self.upper
        }
    }

    /// Larger of the two bounds.
    #[inline]
    #[must_use]
    pub const fn max(self) -> i16 {
        if self.lower < self.upper {
            self.upper
        } else {
            self.lower
        }
    }
}

impl Default for OutputRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Paired X/Y result of a joystick read.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickReading {
    pub x: i16,
    pub y: i16,
}

impl JoystickReading {
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub const NEUTRAL: Self = Self { x: 0, y: 0 };

    /// True when both axes report no deflection.
    #[inline]
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc_scale_center() {
        assert_eq!(AdcScale::TEN_BIT.center(), 512);
        assert_eq!(AdcScale::TWELVE_BIT.center(), 2048);
        assert_eq!(AdcScale::default(), AdcScale::TEN_BIT);
    }

    #[test]
    fn test_adc_scale_clamp() {
        assert_eq!(AdcScale::TEN_BIT.clamp(0), 0);
        assert_eq!(AdcScale::TEN_BIT.clamp(1024), 1024);
        assert_eq!(AdcScale::TEN_BIT.clamp(4095), 1024);
    }

    #[test]
    fn test_output_range_min_max() {
        let inverted = OutputRange::new(100, -100);
        assert_eq!(inverted.min(), -100);
        assert_eq!(inverted.max(), 100);
        assert_eq!(OutputRange::DEFAULT.min(), -255);
        assert_eq!(OutputRange::DEFAULT.max(), 255);
    }

    #[test]
    fn test_joystick_reading_neutral() {
        assert!(JoystickReading::NEUTRAL.is_neutral());
        assert!(!JoystickReading::new(0, -3).is_neutral());
    }
}
