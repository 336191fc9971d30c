//! Concrete stage implementations for the Thermion sensing engine
//!
//! This crate provides implementations of the traits defined in
//! thermion-core:
//!
//! - Averaging ADC sampler with settling-time discard
//! - Voltage-divider resistance converter
//! - Lookup-table temperature converter with a built-in NTC table
//! - Smoothing filters (exponential and incremental moving average)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod converter;
pub mod filter;
pub mod sampler;
