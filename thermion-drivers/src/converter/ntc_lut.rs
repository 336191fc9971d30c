//! Lookup-table temperature converter
//!
//! Brackets the measured resistance in a calibration table by binary
//! search, then linearly interpolates between the two surrounding
//! entries. Resistances outside the calibration range clamp to the
//! nearest table edge; only a zero (sentinel) resistance fails the
//! conversion.

use thermion_core::lut::{bracket_search, interpolate, TableOrder};
use thermion_core::math;
use thermion_core::table::CalibrationTable;
use thermion_core::traits::{TemperatureConverter, TEMP_SENTINEL_X10};

/// Table-driven resistance-to-temperature converter
///
/// Holds a validated calibration table in either key order; NTC tables
/// are conventionally descending (coldest, highest-resistance entry
/// first). The table is shared read-only; the converter itself is
/// stateless and copyable.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NtcLutConverter {
    table: CalibrationTable,
}

impl NtcLutConverter {
    /// Create a converter over a validated calibration table
    pub fn new(table: CalibrationTable) -> Self {
        Self { table }
    }

    /// The calibration table in use
    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }
}

impl TemperatureConverter for NtcLutConverter {
    fn to_temperature_x10(&self, resistance_x10: u32) -> i16 {
        // Zero is the resistance converter's failure sentinel.
        if resistance_x10 == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("NtcLutConverter: zero resistance, failing the read");
            return TEMP_SENTINEL_X10;
        }

        let entries = self.table.entries();
        let bracket = bracket_search(
            entries,
            resistance_x10,
            |entry| entry.resistance_x10,
            TableOrder::Auto,
        );

        if let Some(index) = bracket.exact {
            return entries[index].temperature_x10;
        }

        if bracket.clamped {
            // Out of calibration range: clamp to the nearest edge
            // temperature instead of extrapolating. The edge pair tells
            // us which end was overshot, whatever the table's order.
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "NtcLutConverter: resistance {} outside calibration range",
                resistance_x10
            );
            return if bracket.lower == 0 {
                entries[0].temperature_x10
            } else {
                entries[entries.len() - 1].temperature_x10
            };
        }

        let cold = entries[bracket.lower];
        let hot = entries[bracket.upper];

        let temperature_x10 = interpolate(
            resistance_x10,
            cold.resistance_x10,
            hot.resistance_x10,
            cold.temperature_x10,
            hot.temperature_x10,
        );

        // Guard against residual drift: the result never leaves the span
        // of the table's extreme entries.
        math::clamp(
            temperature_x10,
            self.table.temperature_min_x10(),
            self.table.temperature_max_x10(),
        )
    }
}
