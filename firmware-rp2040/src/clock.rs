//! Millisecond clock on the Embassy time driver.

use control_core::Clock;
use embassy_time::Instant;

/// [`Clock`] backed by [`embassy_time::Instant`].
///
/// Zero-sized, so every device can own a copy.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
