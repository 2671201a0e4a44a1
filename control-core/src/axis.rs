//! Analog axis conditioning: center trim, dead zone, rescaling.
//!
//! A potentiometer-based stick rarely rests exactly at the electrical
//! center. Calibration captures the resting sample and stores how far it
//! drifted and to which side. While calibrated, every sample within
//! `drift + margin` of the nominal center reads as exactly `0`; outside that
//! band the sample is pulled in by the band width and stretched back over
//! the full output range in two stages:
//!
//! ```text
//! sample -> [-255, 255] -> [lower, upper]
//! ```
//!
//! An uncalibrated axis maps the raw converter range straight onto the
//! output range, with no dead zone.

use crate::hal::AnalogInput;
use crate::remap::remap;
use crate::types::{AdcScale, OutputRange};

/// Symmetric intermediate range of the calibrated path.
pub const INTERMEDIATE_RANGE: OutputRange = OutputRange::DEFAULT;

/// Side of the nominal center a control drifted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Rests below the nominal center.
    Low,
    /// Rests above the nominal center.
    High,
}

/// Center trim of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trim {
    /// No usable trim: either never calibrated, or the rest sample hit the
    /// nominal center exactly.
    Uncalibrated,
    /// Resting point is `magnitude` counts away from the nominal center.
    Offset { side: Side, magnitude: u16 },
}

impl Trim {
    /// Derive the trim from a sample taken with the control at rest.
    #[must_use]
    pub fn from_rest_sample(sample: u16, scale: AdcScale) -> Self {
        let delta = i32::from(scale.clamp(sample)) - i32::from(scale.center());
        let magnitude = delta.unsigned_abs() as u16;
        match delta {
            0 => Trim::Uncalibrated,
            d if d > 0 => Trim::Offset {
                side: Side::High,
                magnitude,
            },
            _ => Trim::Offset {
                side: Side::Low,
                magnitude,
            },
        }
    }

    /// Drift below the center (`left_shift`), zero when drifted high.
    #[inline]
    #[must_use]
    pub const fn low_shift(self) -> u16 {
        match self {
            Trim::Offset {
                side: Side::Low,
                magnitude,
            } => magnitude,
            _ => 0,
        }
    }

    /// Drift above the center (`right_shift`), zero when drifted low.
    #[inline]
    #[must_use]
    pub const fn high_shift(self) -> u16 {
        match self {
            Trim::Offset {
                side: Side::High,
                magnitude,
            } => magnitude,
            _ => 0,
        }
    }
}

/// Immutable calibration of one axis: trim plus target range.
///
/// Produced by [`AxisConditioner::calibrate`] and replaced as a whole, never
/// patched field by field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub trim: Trim,
    pub range: OutputRange,
}

impl Calibration {
    /// No trim, raw converter range mapped onto `range`.
    #[must_use]
    pub const fn uncalibrated(range: OutputRange) -> Self {
        Self {
            trim: Trim::Uncalibrated,
            range,
        }
    }

    /// Calibrate from a sample taken with the control at rest.
    #[must_use]
    pub fn from_rest_sample(sample: u16, scale: AdcScale, range: OutputRange) -> Self {
        Self {
            trim: Trim::from_rest_sample(sample, scale),
            range,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_calibrated(&self) -> bool {
        matches!(self.trim, Trim::Offset { .. })
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::uncalibrated(OutputRange::DEFAULT)
    }
}

/// Converts raw samples of one axis into calibrated signed values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConditioner {
    scale: AdcScale,
    margin: u16,
    calibration: Calibration,
}

impl AxisConditioner {
    /// Create an uncalibrated conditioner with the default output range.
    ///
    /// `margin` widens the dead zone beyond the measured drift. It only
    /// takes effect once the axis is calibrated.
    #[must_use]
    pub const fn new(scale: AdcScale, margin: u16) -> Self {
        Self {
            scale,
            margin,
            calibration: Calibration::uncalibrated(OutputRange::DEFAULT),
        }
    }

    /// Start from an existing calibration.
    #[must_use]
    pub const fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    /// Recalibrate from a rest sample and set a new output range.
    ///
    /// Must be called with the control released; the sample is trusted.
    pub fn calibrate(&mut self, rest_sample: u16, range: OutputRange) -> Calibration {
        self.calibration = Calibration::from_rest_sample(rest_sample, self.scale, range);
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Axis calibrated at {}: {}",
            rest_sample,
            self.calibration
        );
        self.calibration
    }

    /// Condition one raw sample.
    ///
    /// Returns exactly `0` inside the dead zone of a calibrated axis.
    /// Otherwise the result lies in the output range, give or take one
    /// quantization step at the edges.
    #[must_use]
    pub fn condition(&self, sample: u16) -> i16 {
        let sample = i32::from(self.scale.clamp(sample));
        let range = self.calibration.range;

        let Some(half_width) = self.dead_zone() else {
            let raw = (0, i32::from(self.scale.full_scale));
            return saturate(remap(sample, raw, bounds(range)));
        };

        let center = i32::from(self.scale.center());
        let half_width = i32::from(half_width);
        if (center - half_width..=center + half_width).contains(&sample) {
            return 0;
        }

        let pulled_in = if sample > center {
            sample - half_width
        } else {
            sample + half_width
        };
        let domain = (half_width - center, center - half_width);
        let intermediate = remap(pulled_in - center, domain, bounds(INTERMEDIATE_RANGE));

        // Upper bound minus one: [-255, 255] lands exactly on [lower, upper].
        let target = (i32::from(range.lower), i32::from(range.upper) - 1);
        saturate(remap(intermediate, bounds(INTERMEDIATE_RANGE), target))
    }

    /// Effective dead-zone half-width around the nominal center, `None`
    /// while uncalibrated.
    #[must_use]
    pub fn dead_zone(&self) -> Option<u16> {
        match self.calibration.trim {
            Trim::Uncalibrated => None,
            Trim::Offset { magnitude, .. } => Some(magnitude.saturating_add(self.margin)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn calibration(&self) -> Calibration {
        self.calibration
    }

    #[inline]
    #[must_use]
    pub const fn margin(&self) -> u16 {
        self.margin
    }

    #[inline]
    #[must_use]
    pub const fn scale(&self) -> AdcScale {
        self.scale
    }
}

#[inline]
fn bounds(range: OutputRange) -> (i32, i32) {
    (i32::from(range.lower), i32::from(range.upper))
}

#[inline]
fn saturate(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// One analog axis: a pin plus its conditioner.
pub struct Axis<A> {
    pin: A,
    conditioner: AxisConditioner,
}

impl<A: AnalogInput> Axis<A> {
    /// Create an uncalibrated axis.
    #[must_use]
    pub fn new(pin: A, scale: AdcScale, margin: u16) -> Self {
        Self {
            pin,
            conditioner: AxisConditioner::new(scale, margin),
        }
    }

    /// Create an uncalibrated axis with a custom output range.
    #[must_use]
    pub fn with_range(pin: A, scale: AdcScale, margin: u16, range: OutputRange) -> Self {
        Self {
            pin,
            conditioner: AxisConditioner::new(scale, margin)
                .with_calibration(Calibration::uncalibrated(range)),
        }
    }

    /// Sample the axis at rest and recalibrate.
    pub fn calibrate(&mut self, range: OutputRange) -> Calibration {
        let rest = self.pin.sample();
        self.conditioner.calibrate(rest, range)
    }

    /// Read and condition one sample.
    pub fn read(&mut self) -> i16 {
        let sample = self.pin.sample();
        self.conditioner.condition(sample)
    }

    /// Get a reference to the conditioner.
    pub fn conditioner(&self) -> &AxisConditioner {
        &self.conditioner
    }

    /// Release the pin.
    pub fn into_inner(self) -> A {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAnalog;

    const SCALE: AdcScale = AdcScale::TEN_BIT;

    fn calibrated_at(rest: u16, margin: u16, range: OutputRange) -> AxisConditioner {
        let mut axis = AxisConditioner::new(SCALE, margin);
        axis.calibrate(rest, range);
        axis
    }

    #[test]
    fn test_trim_sides() {
        assert_eq!(Trim::from_rest_sample(512, SCALE), Trim::Uncalibrated);
        assert_eq!(
            Trim::from_rest_sample(600, SCALE),
            Trim::Offset {
                side: Side::High,
                magnitude: 88
            }
        );
        assert_eq!(
            Trim::from_rest_sample(500, SCALE),
            Trim::Offset {
                side: Side::Low,
                magnitude: 12
            }
        );
    }

    #[test]
    fn test_trim_shifts_are_exclusive() {
        let high = Trim::from_rest_sample(700, SCALE);
        assert_eq!((high.low_shift(), high.high_shift()), (0, 188));
        let low = Trim::from_rest_sample(400, SCALE);
        assert_eq!((low.low_shift(), low.high_shift()), (112, 0));
        assert_eq!(Trim::Uncalibrated.high_shift(), 0);
    }

    #[test]
    fn test_recalibration_replaces_old_side() {
        let mut axis = calibrated_at(700, 0, OutputRange::DEFAULT);
        let cal = axis.calibrate(400, OutputRange::DEFAULT);
        assert_eq!(cal.trim.high_shift(), 0);
        assert_eq!(cal.trim.low_shift(), 112);
        assert_eq!(axis.dead_zone(), Some(112));
    }

    #[test]
    fn test_uncalibrated_center_is_midpoint() {
        let axis = AxisConditioner::new(SCALE, 0);
        assert_eq!(axis.condition(512), 0);

        let axis = AxisConditioner::new(SCALE, 0)
            .with_calibration(Calibration::uncalibrated(OutputRange::new(0, 1000)));
        assert_eq!(axis.condition(512), 500);
    }

    #[test]
    fn test_uncalibrated_ignores_margin() {
        let axis = AxisConditioner::new(SCALE, 100);
        assert_eq!(axis.dead_zone(), None);
        assert_ne!(axis.condition(530), 0);
        assert_eq!(axis.condition(0), -255);
        assert_eq!(axis.condition(1023), 255);
    }

    #[test]
    fn test_calibrating_at_center_matches_uncalibrated() {
        let range = OutputRange::new(-100, 100);
        let centered = calibrated_at(512, 20, range);
        assert!(!centered.calibration().is_calibrated());
        let plain =
            AxisConditioner::new(SCALE, 20).with_calibration(Calibration::uncalibrated(range));
        for sample in (0..=1024).step_by(7) {
            assert_eq!(centered.condition(sample), plain.condition(sample));
        }
    }

    #[test]
    fn test_dead_zone_above_center() {
        let axis = calibrated_at(600, 10, OutputRange::DEFAULT);
        assert_eq!(axis.dead_zone(), Some(98));
        for sample in 414..=610 {
            assert_eq!(axis.condition(sample), 0, "sample {}", sample);
        }
        assert_ne!(axis.condition(413), 0);
        assert_ne!(axis.condition(611), 0);
    }

    #[test]
    fn test_dead_zone_below_center() {
        let axis = calibrated_at(480, 0, OutputRange::DEFAULT);
        assert_eq!(axis.dead_zone(), Some(32));
        assert_eq!(axis.condition(480), 0);
        assert_eq!(axis.condition(544), 0);
        assert!(axis.condition(545) > 0);
        assert!(axis.condition(479) < 0);
    }

    #[test]
    fn test_calibrated_saturation() {
        let axis = calibrated_at(600, 0, OutputRange::DEFAULT);
        assert_eq!(axis.condition(600), 0);
        assert_eq!(axis.condition(1023), 255);
        assert_eq!(axis.condition(1024), 256);
        assert_eq!(axis.condition(0), -255);
    }

    #[test]
    fn test_calibrated_custom_range() {
        let axis = calibrated_at(600, 0, OutputRange::new(-1000, 1000));
        assert_eq!(axis.condition(0), -1000);
        let top = axis.condition(1023);
        assert!((995..=1000).contains(&top), "top {}", top);
    }

    #[test]
    fn test_second_stage_rescale_is_exact() {
        // Applying the inclusive-upper step twice would give 101 at full scale.
        let axis = calibrated_at(600, 0, OutputRange::new(-100, 100));
        assert_eq!(axis.condition(1023), 100);
        assert_eq!(axis.condition(0), -100);
        assert_eq!(axis.condition(600), 0);
    }

    #[test]
    fn test_calibrated_inverted_range() {
        let axis = calibrated_at(600, 0, OutputRange::new(255, -255));
        assert_eq!(axis.condition(0), 255);
        assert_eq!(axis.condition(1023), -255);
        assert_eq!(axis.condition(600), 0);
    }

    #[test]
    fn test_output_is_monotonic_outside_dead_zone() {
        let axis = calibrated_at(560, 5, OutputRange::DEFAULT);
        let mut last = i16::MIN;
        for sample in 0..=1023 {
            let value = axis.condition(sample);
            assert!(value >= last || value == 0 || last == 0);
            if value != 0 {
                last = value;
            }
            assert!((-255..=255).contains(&value));
        }
    }

    #[test]
    fn test_condition_is_idempotent() {
        let axis = calibrated_at(530, 3, OutputRange::new(-50, 50));
        let first = axis.condition(800);
        for _ in 0..10 {
            assert_eq!(axis.condition(800), first);
        }
    }

    #[test]
    fn test_over_range_sample_is_clamped() {
        let axis = calibrated_at(600, 0, OutputRange::DEFAULT);
        assert_eq!(axis.condition(u16::MAX), axis.condition(1024));
    }

    #[test]
    fn test_sixteen_bit_scale_with_wide_range() {
        let axis = AxisConditioner::new(AdcScale::new(65535), 0)
            .with_calibration(Calibration::uncalibrated(OutputRange::new(-20000, 20000)));
        assert_eq!(axis.condition(0), -20000);
        assert_eq!(axis.condition(32767), 0);
        assert_eq!(axis.condition(65535), 20001);

        let mut axis = AxisConditioner::new(AdcScale::new(65535), 100);
        axis.calibrate(33000, OutputRange::new(i16::MIN, i16::MAX));
        assert_eq!(axis.condition(33000), 0);
        assert_eq!(axis.condition(0), i16::MIN);
        assert!(axis.condition(65535) > 32000);
    }

    #[test]
    fn test_degenerate_rest_sample() {
        // Rest sample at the rail: the dead zone swallows the whole range.
        let axis = calibrated_at(0, 0, OutputRange::DEFAULT);
        assert_eq!(axis.dead_zone(), Some(512));
        assert_eq!(axis.condition(0), 0);
        assert_eq!(axis.condition(1024), 0);

        let axis = calibrated_at(1000, 200, OutputRange::DEFAULT);
        assert_eq!(axis.condition(1024), 0);
    }

    #[test]
    fn test_axis_round_trip_at_rest() {
        let pin = MockAnalog::new(547);
        let mut axis = Axis::new(pin.clone(), SCALE, 0);
        axis.calibrate(OutputRange::new(-90, 90));
        assert_eq!(axis.read(), 0);

        pin.set(0);
        assert_eq!(axis.read(), -90);
    }

    #[test]
    fn test_axis_with_range_uncalibrated() {
        let pin = MockAnalog::new(512);
        let mut axis = Axis::with_range(pin, SCALE, 0, OutputRange::new(0, 100));
        assert_eq!(axis.read(), 50);
        assert!(!axis.conditioner().calibration().is_calibrated());
    }
}
