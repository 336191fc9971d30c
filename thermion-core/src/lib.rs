//! Board-agnostic core of the Thermion temperature sensing engine
//!
//! This crate contains everything that does not depend on specific
//! hardware implementations:
//!
//! - Stage abstraction traits (sampler, converters, filter)
//! - Calibration table types and validation
//! - Generic monotonic-table bracketing and linear interpolation
//! - Overflow-safe integer math helpers
//! - The sample-to-temperature pipeline orchestrator
//!
//! All values crossing stage boundaries use a x10 fixed-point convention:
//! a resistance of `10000` means 1000.0 Ω, a temperature of `250` means
//! 25.0 °C.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod lut;
pub mod math;
pub mod pipeline;
pub mod table;
pub mod traits;
