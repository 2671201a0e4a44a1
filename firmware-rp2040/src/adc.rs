//! Blocking RP2040 ADC shared by several analog pins.
//!
//! The RP2040 has a single converter multiplexed over GPIO 26-29. Each
//! [`AdcInput`] owns one channel and borrows the converter only for the
//! duration of a conversion.

use core::cell::RefCell;

use control_core::{AdcScale, AnalogInput};
use defmt::warn;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// The converter, shareable between channels polled from the same task.
pub type SharedAdc<'d> = Mutex<NoopRawMutex, RefCell<Adc<'d, Blocking>>>;

/// Native resolution of the RP2040 converter.
pub const RP2040_ADC_SCALE: AdcScale = AdcScale::TWELVE_BIT;

/// One analog pin on the shared converter.
pub struct AdcInput<'d> {
    adc: &'d SharedAdc<'d>,
    channel: Channel<'d>,
}

impl<'d> AdcInput<'d> {
    /// Create an input for an already configured ADC channel.
    #[must_use]
    pub fn new(adc: &'d SharedAdc<'d>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for AdcInput<'_> {
    /// A failed conversion reads as the nominal center, i.e. no deflection.
    fn sample(&mut self) -> u16 {
        let channel = &mut self.channel;
        match self.adc.lock(|adc| adc.borrow_mut().blocking_read(channel)) {
            Ok(sample) => sample,
            Err(e) => {
                warn!("ADC read failed: {:?}", e);
                RP2040_ADC_SCALE.center()
            }
        }
    }
}
