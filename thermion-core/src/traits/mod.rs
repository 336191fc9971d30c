//! Stage abstraction traits
//!
//! These traits define the seams between the pipeline stages, so any
//! stage can be swapped for a synthetic implementation in tests or for a
//! different hardware backend.

pub mod converter;
pub mod filter;
pub mod sampler;

pub use converter::{ResistanceConverter, TemperatureConverter, TEMP_SENTINEL_X10};
pub use filter::{Filter, NoFilter};
pub use sampler::{AdcReader, Sampler, ADC_MAX_10BIT};
