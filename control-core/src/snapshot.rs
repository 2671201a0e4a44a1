//! One poll's worth of control state, as handed from a poll loop to a consumer.

use crate::types::JoystickReading;

/// Everything one pass over a stick, a push button and a potentiometer saw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlSnapshot {
    pub stick: JoystickReading,
    pub stick_clicked: bool,
    pub button_clicked: bool,
    pub pot: u16,
}

impl ControlSnapshot {
    /// True when either button reported a click.
    #[inline]
    #[must_use]
    pub const fn any_click(&self) -> bool {
        self.stick_clicked || self.button_clicked
    }

    /// Fold a newer snapshot into one the consumer has not seen yet.
    ///
    /// Levels come from `newer`; clicks from either snapshot are kept, since
    /// each one is reported only once by its button.
    #[must_use]
    pub const fn merge(self, newer: Self) -> Self {
        Self {
            stick: newer.stick,
            stick_clicked: self.stick_clicked || newer.stick_clicked,
            button_clicked: self.button_clicked || newer.button_clicked,
            pot: newer.pot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unseen_clicks() {
        let pending = ControlSnapshot {
            stick_clicked: true,
            ..ControlSnapshot::default()
        };
        let newer = ControlSnapshot {
            stick: JoystickReading::new(10, -4),
            button_clicked: true,
            pot: 300,
            ..ControlSnapshot::default()
        };

        let merged = pending.merge(newer);
        assert!(merged.stick_clicked);
        assert!(merged.button_clicked);
        assert_eq!(merged.stick, JoystickReading::new(10, -4));
        assert_eq!(merged.pot, 300);
    }

    #[test]
    fn test_merge_takes_latest_levels() {
        let pending = ControlSnapshot {
            stick: JoystickReading::new(50, 50),
            pot: 1000,
            ..ControlSnapshot::default()
        };
        let merged = pending.merge(ControlSnapshot::default());
        assert_eq!(merged, ControlSnapshot::default());
        assert!(!merged.any_click());
    }
}
