//! Sampler implementations

pub mod averaging;

pub use averaging::{AveragingSampler, SamplingConfig};
