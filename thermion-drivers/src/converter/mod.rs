//! Conversion stage implementations

pub mod divider;
pub mod ntc_lut;
pub mod tables;

pub use divider::{DividerConfig, VoltageDivider};
pub use ntc_lut::NtcLutConverter;
pub use tables::NTC_10K_B3950;
