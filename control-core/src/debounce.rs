//! Time-gated falling-edge detector for pull-up inputs.
//!
//! A press pulls the line low. The detector reports one click per press:
//! a falling edge is only accepted once the debounce window has passed
//! since the last accepted edge, and only if a second read still sees the
//! line low. Bounces inside the window are swallowed, which also means two
//! presses closer together than the window are reported at most once.

use crate::hal::DigitalInput;
use crate::types::{ACTIVE_LEVEL, RESTING_LEVEL};

/// Minimum time between two accepted edges, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u64 = 5;

/// Edge detector state for one digital input.
///
/// Holds only the level seen by the previous poll and the time of the last
/// accepted edge. The pin itself is borrowed per poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    previous_level: bool,
    last_transition_ms: u64,
    window_ms: u64,
}

impl Debouncer {
    /// Create a detector resting at the pull-up level, timer started at `now_ms`.
    #[must_use]
    pub const fn new(now_ms: u64) -> Self {
        Self {
            previous_level: RESTING_LEVEL,
            last_transition_ms: now_ms,
            window_ms: DEBOUNCE_WINDOW_MS,
        }
    }

    /// Use a different debounce window.
    #[must_use]
    pub const fn with_window(mut self, window_ms: u64) -> Self {
        self.window_ms = window_ms;
        self
    }

    /// Sample `pin` once (twice on a candidate edge) and report a click.
    ///
    /// Returns `true` when the line went from resting to active since the
    /// previous poll, at least the debounce window has elapsed since the
    /// last accepted edge, and a confirming read still sees the line active.
    ///
    /// The level stored for the next poll is always the first read. The
    /// confirming read is local to this call.
    pub fn poll<P: DigitalInput + ?Sized>(&mut self, pin: &mut P, now_ms: u64) -> bool {
        let current = pin.is_high();
        let mut clicked = false;

        if self.previous_level == RESTING_LEVEL && current == ACTIVE_LEVEL {
            let elapsed = now_ms.wrapping_sub(self.last_transition_ms);
            if elapsed >= self.window_ms {
                self.last_transition_ms = now_ms;
                clicked = pin.is_high() == ACTIVE_LEVEL;
                #[cfg(feature = "defmt")]
                defmt::trace!("Edge at {} ms, confirmed: {}", now_ms, clicked);
            } else {
                #[cfg(feature = "defmt")]
                defmt::trace!("Edge suppressed, {} ms since last", elapsed);
            }
        }

        self.previous_level = current;
        clicked
    }

    /// Level observed at the end of the most recent poll.
    #[inline]
    #[must_use]
    pub const fn previous_level(&self) -> bool {
        self.previous_level
    }

    /// Time of the last accepted edge (or construction).
    #[inline]
    #[must_use]
    pub const fn last_transition_ms(&self) -> u64 {
        self.last_transition_ms
    }

    /// Configured debounce window.
    #[inline]
    #[must_use]
    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }
}
