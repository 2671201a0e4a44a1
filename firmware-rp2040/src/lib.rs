//! Debounced buttons and calibrated joystick on a Raspberry Pi Pico (RP2040).
//!
//! This crate wires the RP2040 peripherals into the collaborator traits of
//! [`control_core`] and bundles the controls of the board into one
//! [`Controls`] value that the firmware polls at a fixed period.
//!
//! # Hardware Configuration
//!
//! | Function        | GPIO | Description |
//! |-----------------|------|-------------|
//! | Stick X         | 26   | ADC0, analog |
//! | Stick Y         | 27   | ADC1, analog |
//! | Potentiometer   | 28   | ADC2, analog |
//! | Stick button    | 22   | Pull-up input, press to GND |
//! | Push button     | 15   | Pull-up input, press to GND |
//! | LED             | 25   | On-board LED (toggles on every click) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with two tasks:
//!
//! - **Poll Task**: Samples every control on a [`Ticker`](embassy_time::Ticker),
//!   signals a [`ControlSnapshot`]
//! - **Report Task**: Waits for snapshots and logs what changed via defmt
//!
//! Communication between tasks uses Embassy's [`Signal`](embassy_sync::signal::Signal)
//! with "latest value wins" semantics. The poll task merges a snapshot the
//! report task has not taken yet ([`ControlSnapshot::merge`]) so no click is lost.
//!
//! # Modules
//!
//! - [`adc`]: Shared blocking ADC ([`SharedAdc`], [`AdcInput`])
//! - [`clock`]: Millisecond clock on the Embassy time driver ([`EmbassyClock`])
//! - [`config`]: Poll period and stick configuration
//! - [`controls`]: Board controls ([`Controls`]), polled into a [`ControlSnapshot`]
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports all public items from [`control_core`] for convenience,
//! so consumers only need to depend on this crate.

#![no_std]

// Ensure mutually exclusive panic handlers
#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they define conflicting panic handlers");

// Re-export core types for convenience
pub use control_core::{
    remap, AdcScale, AnalogInput, Axis, AxisConditioner, Button, Calibration, Clock,
    ControlSnapshot, Debouncer, DigitalInput, HalInput, Joystick, JoystickConfig,
    JoystickReading, OutputRange, Pot, Side, Trim, DEBOUNCE_WINDOW_MS, DEFAULT_JOYSTICK_CONFIG,
};

pub mod adc;
pub mod clock;
pub mod config;
pub mod controls;

pub use adc::{AdcInput, SharedAdc};
pub use clock::EmbassyClock;
pub use controls::{Controls, PullUpInput, RpButton, RpJoystick, RpPot};
