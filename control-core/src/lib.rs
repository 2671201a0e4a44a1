//! Signal conditioning for hand-operated controls wired to a microcontroller.
//!
//! This crate turns raw pin readings into values an application can use
//! directly, without any platform-specific dependencies. It can be used both
//! in embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`debounce`]: Time-gated edge detector shared by button-like inputs ([`Debouncer`])
//! - [`axis`]: Dead-zone and center-trim conditioning of analog axes ([`AxisConditioner`], [`Calibration`])
//! - [`remap`]: Truncating integer linear interpolation ([`remap()`])
//! - [`hal`]: Collaborator traits the host platform implements ([`DigitalInput`], [`AnalogInput`], [`Clock`])
//! - [`button`], [`pot`], [`joystick`]: Device wrappers built from the above
//! - [`snapshot`]: Per-poll state handed to a consumer ([`ControlSnapshot`])
//!
//! # Example
//!
//! ```rust
//! use control_core::{AdcScale, AxisConditioner, OutputRange};
//!
//! let mut axis = AxisConditioner::new(AdcScale::TEN_BIT, 0);
//!
//! // Stick rests slightly right of the electrical center.
//! axis.calibrate(600, OutputRange::DEFAULT);
//! assert_eq!(axis.condition(600), 0);
//! assert_eq!(axis.condition(520), 0);
//! assert!(axis.condition(1023) > 250);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and debug logging (for embedded targets)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.
//! Polling is single-threaded and synchronous: every call performs at most
//! two raw reads and never blocks.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod axis;
pub mod button;
pub mod debounce;
pub mod hal;
pub mod joystick;
pub mod pot;
pub mod remap;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use axis::{Axis, AxisConditioner, Calibration, Side, Trim, INTERMEDIATE_RANGE};
pub use button::Button;
pub use debounce::{Debouncer, DEBOUNCE_WINDOW_MS};
pub use hal::{AnalogInput, Clock, DigitalInput, HalInput};
pub use joystick::{Joystick, JoystickConfig, DEFAULT_JOYSTICK_CONFIG};
pub use pot::Pot;
pub use remap::remap;
pub use snapshot::ControlSnapshot;
pub use types::{AdcScale, JoystickReading, OutputRange, ACTIVE_LEVEL, RESTING_LEVEL};
