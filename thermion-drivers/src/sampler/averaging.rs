//! Averaging ADC sampler
//!
//! Produces one trusted raw value per call by discarding the first
//! acquisitions after a channel switch (signal settling) and averaging
//! several more to reduce noise.

use embedded_hal::delay::DelayNs;
use thermion_core::traits::{AdcReader, Sampler, ADC_MAX_10BIT};

/// Sampling stage configuration
///
/// Fixed after construction; one instance per sampler.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Consecutive acquisitions averaged per sample (min 1; 0 falls back
    /// to 1). Powers of two keep the division cheap.
    pub samples_to_average: u8,
    /// Initial acquisitions discarded to flush settling artifacts
    pub samples_to_discard: u8,
    /// Settle delay after each acquisition, in microseconds (0 = none)
    pub settle_us: u32,
    /// Full-scale raw count of the converter
    pub adc_max: u16,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples_to_average: 16,
            samples_to_discard: 4,
            settle_us: 50,
            adc_max: ADC_MAX_10BIT,
        }
    }
}

/// Averaging sampler over a raw ADC source
///
/// Each `sample()` call blocks the calling context for
/// `(discard + average) * settle_us` while the acquisitions run. There is
/// no failure path: the result is always a value in `[0, adc_max]`.
pub struct AveragingSampler<A, D> {
    adc: A,
    delay: D,
    config: SamplingConfig,
}

impl<A, D> AveragingSampler<A, D> {
    /// Create a sampler over a raw source and a delay provider
    ///
    /// A zero `samples_to_average` is replaced with 1.
    pub fn new(adc: A, delay: D, config: SamplingConfig) -> Self {
        let mut config = config;
        if config.samples_to_average == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("AveragingSampler: samples_to_average 0, falling back to 1");
            config.samples_to_average = 1;
        }
        Self { adc, delay, config }
    }

    /// The effective configuration (after fallback)
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }
}

impl<A: AdcReader, D: DelayNs> AveragingSampler<A, D> {
    fn acquire(&mut self) -> u16 {
        let raw = self.adc.read();
        if self.config.settle_us > 0 {
            self.delay.delay_us(self.config.settle_us);
        }
        raw
    }
}

impl<A: AdcReader, D: DelayNs> Sampler for AveragingSampler<A, D> {
    fn sample(&mut self) -> u16 {
        let count = self.config.samples_to_average as u32;

        // Settle: acquire and drop the first readings.
        for _ in 0..self.config.samples_to_discard {
            let _ = self.acquire();
        }

        // Accumulate in u32; 255 samples of a 16-bit reading cannot
        // overflow.
        let mut accumulated: u32 = 0;
        for _ in 0..count {
            accumulated += self.acquire() as u32;
        }

        // Rounded mean: add half the count before dividing. A count of 1
        // returns the raw reading unchanged.
        let avg = if count == 1 {
            accumulated as u16
        } else {
            ((accumulated + (count >> 1)) / count) as u16
        };

        avg.min(self.config.adc_max)
    }
}
