//! Calibration table types
//!
//! A calibration table maps thermistor resistance to temperature as an
//! ordered sequence of x10 fixed-point pairs. Tables are built once,
//! validated at construction, and shared read-only by any number of
//! pipeline instances.

/// One calibration point: resistance in 0.1 Ω units, temperature in
/// 0.1 °C units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationEntry {
    /// Resistance x10 (e.g. `10000` = 1000.0 Ω)
    pub resistance_x10: u32,
    /// Temperature x10 (e.g. `250` = 25.0 °C)
    pub temperature_x10: i16,
}

impl CalibrationEntry {
    /// Create a calibration point
    pub const fn new(resistance_x10: u32, temperature_x10: i16) -> Self {
        Self {
            resistance_x10,
            temperature_x10,
        }
    }
}

/// Calibration table validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// Fewer than two entries; bracketing needs at least one pair
    TooShort,
    /// Resistance keys are not strictly monotonic
    NotMonotonic,
}

/// Validated, immutable calibration table
///
/// Wraps a static slice of entries whose resistance keys are strictly
/// monotonic (either direction). NTC tables are descending by convention:
/// highest resistance (coldest) first.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationTable {
    entries: &'static [CalibrationEntry],
}

impl CalibrationTable {
    /// Validate and wrap a table
    ///
    /// Requires at least 2 entries and strictly monotonic resistance keys.
    /// Duplicate keys are rejected: the bracketing search does not define
    /// which duplicate it would match.
    pub fn try_new(entries: &'static [CalibrationEntry]) -> Result<Self, TableError> {
        if entries.len() < 2 {
            return Err(TableError::TooShort);
        }

        let descending = entries[0].resistance_x10 > entries[1].resistance_x10;
        for pair in entries.windows(2) {
            let strict = if descending {
                pair[0].resistance_x10 > pair[1].resistance_x10
            } else {
                pair[0].resistance_x10 < pair[1].resistance_x10
            };
            if !strict {
                return Err(TableError::NotMonotonic);
            }
        }

        Ok(Self { entries })
    }

    /// All entries, in table order
    #[inline]
    pub fn entries(&self) -> &'static [CalibrationEntry] {
        self.entries
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; `try_new` rejects short tables
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry in table order
    #[inline]
    pub fn first(&self) -> CalibrationEntry {
        self.entries[0]
    }

    /// Last entry in table order
    #[inline]
    pub fn last(&self) -> CalibrationEntry {
        self.entries[self.entries.len() - 1]
    }

    /// Lowest temperature spanned by the table, x10
    pub fn temperature_min_x10(&self) -> i16 {
        self.first().temperature_x10.min(self.last().temperature_x10)
    }

    /// Highest temperature spanned by the table, x10
    pub fn temperature_max_x10(&self) -> i16 {
        self.first().temperature_x10.max(self.last().temperature_x10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &[CalibrationEntry] = &[
        CalibrationEntry::new(1_000_000, -400),
        CalibrationEntry::new(50_000, 250),
        CalibrationEntry::new(10_000, 400),
    ];

    #[test]
    fn test_accepts_descending() {
        let table = CalibrationTable::try_new(GOOD).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.first().temperature_x10, -400);
        assert_eq!(table.last().temperature_x10, 400);
    }

    #[test]
    fn test_accepts_ascending() {
        const ASC: &[CalibrationEntry] = &[
            CalibrationEntry::new(100, 400),
            CalibrationEntry::new(200, 250),
            CalibrationEntry::new(300, -400),
        ];
        assert!(CalibrationTable::try_new(ASC).is_ok());
    }

    #[test]
    fn test_rejects_short_table() {
        const ONE: &[CalibrationEntry] = &[CalibrationEntry::new(100, 0)];
        assert!(matches!(
            CalibrationTable::try_new(ONE),
            Err(TableError::TooShort)
        ));
        assert!(matches!(
            CalibrationTable::try_new(&[]),
            Err(TableError::TooShort)
        ));
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        const DUP: &[CalibrationEntry] = &[
            CalibrationEntry::new(200, 0),
            CalibrationEntry::new(200, 10),
            CalibrationEntry::new(100, 20),
        ];
        assert!(matches!(
            CalibrationTable::try_new(DUP),
            Err(TableError::NotMonotonic)
        ));
    }

    #[test]
    fn test_rejects_direction_change() {
        const ZIGZAG: &[CalibrationEntry] = &[
            CalibrationEntry::new(300, 0),
            CalibrationEntry::new(100, 10),
            CalibrationEntry::new(200, 20),
        ];
        assert!(matches!(
            CalibrationTable::try_new(ZIGZAG),
            Err(TableError::NotMonotonic)
        ));
    }

    #[test]
    fn test_temperature_span() {
        let table = CalibrationTable::try_new(GOOD).unwrap();
        assert_eq!(table.temperature_min_x10(), -400);
        assert_eq!(table.temperature_max_x10(), 400);
    }
}
