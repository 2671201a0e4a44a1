//! Compile-time firmware configuration.

use control_core::{JoystickConfig, OutputRange};

use crate::adc::RP2040_ADC_SCALE;

/// Period of the control poll loop.
pub const POLL_PERIOD_MS: u64 = 10;

/// Stick configuration used until the boot-time calibration.
///
/// The cheap thumb sticks on most breakout boards wobble by a few dozen
/// counts at rest on a 12-bit converter.
pub const STICK_CONFIG: JoystickConfig = JoystickConfig {
    scale: RP2040_ADC_SCALE,
    margin_x: 40,
    margin_y: 40,
    x_range: OutputRange::DEFAULT,
    y_range: OutputRange::DEFAULT,
};

/// Output range of the stick X axis after calibration.
pub const STICK_X_RANGE: OutputRange = OutputRange::new(-100, 100);

/// Output range of the stick Y axis after calibration (pushing up is positive).
pub const STICK_Y_RANGE: OutputRange = OutputRange::new(100, -100);

/// Minimum potentiometer change that gets logged.
pub const POT_LOG_STEP: u16 = 32;
