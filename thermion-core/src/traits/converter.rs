//! Conversion stage traits
//!
//! Failure crosses these boundaries as sentinel values, not structured
//! errors: a resistance of `0` and a temperature of [`TEMP_SENTINEL_X10`]
//! are reserved and unreachable from any valid reading.

/// Sentinel returned for any failed temperature conversion or read.
///
/// `i16::MIN` (-32768) is unreachable from the calibration range of any
/// supported table (-40.0 °C to +40.0 °C gives -400..=400), so callers can
/// test for it without ambiguity.
pub const TEMP_SENTINEL_X10: i16 = i16::MIN;

/// Converts a raw sample into a thermistor resistance
pub trait ResistanceConverter {
    /// Convert a raw value into a resistance in 0.1 Ω units
    ///
    /// Returns `0` for a saturated or shorted reading (raw value at
    /// either end of the converter range). Zero is never a physically
    /// meaningful resistance here; callers must treat it as a failed
    /// read.
    fn to_resistance_x10(&self, raw: u16) -> u32;
}

/// Converts a thermistor resistance into a temperature
pub trait TemperatureConverter {
    /// Convert a resistance in 0.1 Ω units into 0.1 °C units
    ///
    /// Returns [`TEMP_SENTINEL_X10`] for a zero (sentinel) resistance.
    /// A resistance outside the calibration range is clamped to the
    /// nearest table edge, not failed.
    fn to_temperature_x10(&self, resistance_x10: u32) -> i16;
}
