//! Smoothing filter implementations

pub mod ema;
pub mod fixed;
pub mod sma;

pub use ema::{EmaConfig, EmaFilter};
pub use fixed::Fixed32;
pub use sma::{SmaConfig, SmaFilter};
