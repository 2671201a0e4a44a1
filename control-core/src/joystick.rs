//! Two-axis analog joystick with an integrated push button.
//!
//! Each axis is conditioned independently. Calibration samples both axes
//! with the stick released, so call [`Joystick::calibrate`] at startup
//! before anyone touches the controls.

use crate::axis::{Axis, Calibration};
use crate::button::Button;
use crate::hal::{AnalogInput, Clock, DigitalInput};
use crate::types::{AdcScale, JoystickReading, OutputRange};

/// Compile-time joystick configuration.
///
/// Customize by creating your own const, starting from
/// [`DEFAULT_JOYSTICK_CONFIG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// Converter range of both axis pins.
    pub scale: AdcScale,
    /// Extra dead-zone counts on the X axis.
    pub margin_x: u16,
    /// Extra dead-zone counts on the Y axis.
    pub margin_y: u16,
    /// Output range of the X axis until the next calibration.
    pub x_range: OutputRange,
    /// Output range of the Y axis until the next calibration.
    pub y_range: OutputRange,
}

/// 10-bit converter, no extra dead zone, `[-255, 255]` on both axes.
pub const DEFAULT_JOYSTICK_CONFIG: JoystickConfig = JoystickConfig {
    scale: AdcScale::TEN_BIT,
    margin_x: 0,
    margin_y: 0,
    x_range: OutputRange::DEFAULT,
    y_range: OutputRange::DEFAULT,
};

impl Default for JoystickConfig {
    fn default() -> Self {
        DEFAULT_JOYSTICK_CONFIG
    }
}

/// Joystick built from two analog pins, one pull-up button pin and a clock.
pub struct Joystick<X, Y, B, C> {
    x: Axis<X>,
    y: Axis<Y>,
    button: Button<B, C>,
}

impl<X, Y, B, C> Joystick<X, Y, B, C>
where
    X: AnalogInput,
    Y: AnalogInput,
    B: DigitalInput,
    C: Clock,
{
    /// Create a joystick with [`DEFAULT_JOYSTICK_CONFIG`].
    #[must_use]
    pub fn new(x_pin: X, y_pin: Y, button_pin: B, clock: C) -> Self {
        Self::with_config(x_pin, y_pin, button_pin, clock, DEFAULT_JOYSTICK_CONFIG)
    }

    /// Create a joystick with a custom configuration.
    #[must_use]
    pub fn with_config(x_pin: X, y_pin: Y, button_pin: B, clock: C, config: JoystickConfig) -> Self {
        Self {
            x: Axis::with_range(x_pin, config.scale, config.margin_x, config.x_range),
            y: Axis::with_range(y_pin, config.scale, config.margin_y, config.y_range),
            button: Button::new(button_pin, clock),
        }
    }

    /// Sample both axes at rest and set new output ranges.
    ///
    /// Returns the new X and Y calibrations.
    pub fn calibrate(
        &mut self,
        x_range: OutputRange,
        y_range: OutputRange,
    ) -> (Calibration, Calibration) {
        let x = self.x.calibrate(x_range);
        let y = self.y.calibrate(y_range);
        #[cfg(feature = "defmt")]
        defmt::debug!("Joystick trimmed: x={} y={}", x.trim, y.trim);
        (x, y)
    }

    /// Read both axes.
    pub fn read(&mut self) -> JoystickReading {
        JoystickReading {
            x: self.x.read(),
            y: self.y.read(),
        }
    }

    /// Poll the integrated button. Returns `true` once per debounced press.
    pub fn poll_click(&mut self) -> bool {
        self.button.poll()
    }

    /// Get a reference to the X axis.
    pub fn x_axis(&self) -> &Axis<X> {
        &self.x
    }

    /// Get a reference to the Y axis.
    pub fn y_axis(&self) -> &Axis<Y> {
        &self.y
    }

    /// Get a reference to the integrated button.
    pub fn button(&self) -> &Button<B, C> {
        &self.button
    }
}
