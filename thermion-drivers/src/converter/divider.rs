//! Voltage-divider resistance converter
//!
//! Sensing circuit: VREF -> fixed pull-up resistor -> junction (ADC reads
//! here) -> NTC -> GND. Equalizing the divider equation with the ADC
//! reading and solving for the thermistor:
//!
//! ```text
//! R_ntc_x10 = (raw * pullup_ohms * 10) / (adc_max - raw)
//! ```
//!
//! The x10 scale gives 0.1 Ω resolution in pure integer math.

use thermion_core::traits::{ResistanceConverter, ADC_MAX_10BIT};

/// Fallback pull-up value when a zero resistance is configured
pub const DEFAULT_PULLUP_OHMS: u32 = 12_700;

/// Voltage-divider configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DividerConfig {
    /// Fixed resistor between VREF and the sensing junction, in ohms
    pub pullup_ohms: u32,
    /// Full-scale raw count of the converter
    pub adc_max: u16,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            pullup_ohms: DEFAULT_PULLUP_OHMS,
            adc_max: ADC_MAX_10BIT,
        }
    }
}

/// Raw-count to thermistor-resistance converter
///
/// Pure function of its fixed configuration; safe to share per channel.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoltageDivider {
    config: DividerConfig,
}

impl VoltageDivider {
    /// Create a converter for the given divider circuit
    ///
    /// A zero pull-up value falls back to [`DEFAULT_PULLUP_OHMS`].
    pub fn new(config: DividerConfig) -> Self {
        let mut config = config;
        if config.pullup_ohms == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "VoltageDivider: pullup 0 Ω, falling back to {} Ω",
                DEFAULT_PULLUP_OHMS
            );
            config.pullup_ohms = DEFAULT_PULLUP_OHMS;
        }
        Self { config }
    }

    /// The effective configuration (after fallback)
    pub fn config(&self) -> &DividerConfig {
        &self.config
    }
}

impl Default for VoltageDivider {
    fn default() -> Self {
        Self::new(DividerConfig::default())
    }
}

impl ResistanceConverter for VoltageDivider {
    fn to_resistance_x10(&self, raw: u16) -> u32 {
        // A raw value pinned to either rail is a shorted or open circuit,
        // not a measurement. At full scale the divider denominator is
        // zero anyway.
        if raw == 0 || raw >= self.config.adc_max {
            #[cfg(feature = "defmt")]
            defmt::debug!("VoltageDivider: saturated raw value {}", raw);
            return 0;
        }

        let numerator = raw as u64 * self.config.pullup_ohms as u64 * 10;
        let denominator = (self.config.adc_max - raw) as u64;

        // Extreme pull-up configurations can exceed the x10 range near
        // full scale; saturate rather than wrap.
        (numerator / denominator).min(u32::MAX as u64) as u32
    }
}
