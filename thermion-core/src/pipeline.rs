//! Sample-to-temperature pipeline
//!
//! Composes the four stages behind one read operation:
//!
//! ```text
//! Sampler -> ResistanceConverter -> TemperatureConverter -> Filter
//! ```
//!
//! A failed stage propagates [`TEMP_SENTINEL_X10`] for that read only;
//! filter state from earlier successful reads is preserved for the next
//! call.

use crate::traits::{
    Filter, NoFilter, ResistanceConverter, Sampler, TemperatureConverter, TEMP_SENTINEL_X10,
};

/// Temperature scale for the convenience read helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Composed temperature sensing pipeline
///
/// Owns one instance of each stage by value. Construction requires the
/// three mandatory stages, so a partially wired pipeline cannot exist;
/// the filter defaults to the pass-through [`NoFilter`].
///
/// Each pipeline owns independent state - one instance per sensor
/// channel, never shared.
///
/// # Example
///
/// ```ignore
/// let mut sensor = TemperaturePipeline::new(sampler, divider, lut)
///     .with_filter(EmaFilter::new(EmaConfig::default()));
/// let temp_x10 = sensor.read_x10();
/// if temp_x10 != TEMP_SENTINEL_X10 {
///     // 250 = 25.0 °C
/// }
/// ```
pub struct TemperaturePipeline<S, R, C, F = NoFilter> {
    sampler: S,
    resistance: R,
    temperature: C,
    filter: F,
}

impl<S, R, C> TemperaturePipeline<S, R, C, NoFilter> {
    /// Compose a pipeline from the three required stages, unfiltered
    pub fn new(sampler: S, resistance: R, temperature: C) -> Self {
        Self {
            sampler,
            resistance,
            temperature,
            filter: NoFilter,
        }
    }
}

impl<S, R, C, F> TemperaturePipeline<S, R, C, F> {
    /// Attach a smoothing filter to the temperature stream
    pub fn with_filter<F2>(self, filter: F2) -> TemperaturePipeline<S, R, C, F2> {
        TemperaturePipeline {
            sampler: self.sampler,
            resistance: self.resistance,
            temperature: self.temperature,
            filter,
        }
    }
}

impl<S, R, C, F> TemperaturePipeline<S, R, C, F>
where
    S: Sampler,
    R: ResistanceConverter,
    C: TemperatureConverter,
    F: Filter<i16>,
{
    /// Read one temperature in 0.1 °C units
    ///
    /// Returns [`TEMP_SENTINEL_X10`] if any stage reports a failed read
    /// (saturated sample, zero resistance). The sentinel is never fed to
    /// the filter.
    pub fn read_x10(&mut self) -> i16 {
        let raw = self.sampler.sample();

        let resistance_x10 = self.resistance.to_resistance_x10(raw);
        if resistance_x10 == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("pipeline: invalid resistance from raw sample {}", raw);
            return TEMP_SENTINEL_X10;
        }

        let temperature_x10 = self.temperature.to_temperature_x10(resistance_x10);
        if temperature_x10 == TEMP_SENTINEL_X10 {
            #[cfg(feature = "defmt")]
            defmt::warn!("pipeline: temperature conversion failed");
            return TEMP_SENTINEL_X10;
        }

        self.filter.apply(temperature_x10)
    }

    /// Read one temperature in whole degrees Celsius
    ///
    /// Sentinel reads stay sentinel.
    pub fn read_celsius(&mut self) -> i16 {
        match self.read_x10() {
            TEMP_SENTINEL_X10 => TEMP_SENTINEL_X10,
            t => t / 10,
        }
    }

    /// Read one temperature in the requested unit, 0.1-degree units
    ///
    /// Fahrenheit is `C * 9/5 + 32`; Kelvin adds 273.15, rounded to
    /// 273.2. Sentinel reads stay sentinel in every unit.
    pub fn read_in_x10(&mut self, unit: TemperatureUnit) -> i16 {
        let celsius_x10 = self.read_x10();
        if celsius_x10 == TEMP_SENTINEL_X10 {
            return TEMP_SENTINEL_X10;
        }

        match unit {
            TemperatureUnit::Celsius => celsius_x10,
            TemperatureUnit::Fahrenheit => {
                (celsius_x10 as i32 * 9 / 5 + 320).clamp(i16::MIN as i32 + 1, i16::MAX as i32)
                    as i16
            }
            TemperatureUnit::Kelvin => {
                (celsius_x10 as i32 + 2732).clamp(i16::MIN as i32 + 1, i16::MAX as i32) as i16
            }
        }
    }
}
