//! The controls wired to the board and the snapshot they produce per poll.

use control_core::{Button, ControlSnapshot, HalInput, Joystick, Pot};
use embassy_rp::gpio::Input;

use crate::adc::AdcInput;
use crate::clock::EmbassyClock;
use crate::config::{STICK_X_RANGE, STICK_Y_RANGE};

/// GPIO configured with the internal pull-up.
pub type PullUpInput<'d> = HalInput<Input<'d>>;

/// Analog stick with its integrated button.
pub type RpJoystick<'d> = Joystick<AdcInput<'d>, AdcInput<'d>, PullUpInput<'d>, EmbassyClock>;

/// Standalone push button.
pub type RpButton<'d> = Button<PullUpInput<'d>, EmbassyClock>;

/// Potentiometer.
pub type RpPot<'d> = Pot<AdcInput<'d>>;

/// All controls of the board.
pub struct Controls<'d> {
    pub stick: RpJoystick<'d>,
    pub button: RpButton<'d>,
    pub pot: RpPot<'d>,
}

impl<'d> Controls<'d> {
    #[must_use]
    pub fn new(stick: RpJoystick<'d>, button: RpButton<'d>, pot: RpPot<'d>) -> Self {
        Self { stick, button, pot }
    }

    /// Trim the stick. The stick must be released.
    pub fn calibrate(&mut self) {
        let (x, y) = self.stick.calibrate(STICK_X_RANGE, STICK_Y_RANGE);
        defmt::info!("Stick calibrated: x={} y={}", x.trim, y.trim);
    }

    /// Poll every control once.
    pub fn poll(&mut self) -> ControlSnapshot {
        ControlSnapshot {
            stick: self.stick.read(),
            stick_clicked: self.stick.poll_click(),
            button_clicked: self.button.poll(),
            pot: self.pot.read(),
        }
    }
}
