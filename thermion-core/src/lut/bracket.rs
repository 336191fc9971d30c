//! Bracketing binary search over monotonic tables
//!
//! Works on any slice of entries through a key-projection closure, so the
//! same search serves resistance tables, voltage tables or anything else
//! with strictly monotonic keys.

/// Expected key order of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableOrder {
    /// `key[0] < key[1] < ... < key[N-1]`
    Ascending,
    /// `key[0] > key[1] > ... > key[N-1]`
    Descending,
    /// Detect from the first two entries
    Auto,
}

/// Result of a bracketing search
///
/// Identifies the pair of entries surrounding the target, or the exact
/// entry on a direct hit. Produced and consumed within one conversion
/// call; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bracket {
    /// Index of the lower bracketing entry (table order, not magnitude)
    pub lower: usize,
    /// Index of the upper bracketing entry
    pub upper: usize,
    /// Index of the exact match, if the target equals a table key
    pub exact: Option<usize>,
    /// Target fell outside the table's key range
    pub out_of_range: bool,
    /// Target was resolved to the nearest edge pair
    pub clamped: bool,
}

impl Bracket {
    const fn exact_at(index: usize) -> Self {
        Self {
            lower: index,
            upper: index,
            exact: Some(index),
            out_of_range: false,
            clamped: false,
        }
    }

    const fn clamped_edge(lower: usize, upper: usize) -> Self {
        Self {
            lower,
            upper,
            exact: None,
            out_of_range: true,
            clamped: true,
        }
    }

    const fn between(lower: usize, upper: usize) -> Self {
        Self {
            lower,
            upper,
            exact: None,
            out_of_range: false,
            clamped: false,
        }
    }
}

/// Find the table entries bracketing `target`
///
/// Binary search over a strictly monotonic table, O(log N) comparisons,
/// no allocation, total: every target produces a result.
///
/// - An exact key match returns `lower == upper` with `exact` set.
/// - A target between two keys returns the straddling pair in table
///   order.
/// - A target beyond either end returns the nearest edge pair (`[0, 1]`
///   or `[N-2, N-1]`) with `clamped` set; callers typically resolve this
///   to the edge entry's value rather than extrapolating.
///
/// `key_of` projects the search key out of an entry, so the search works
/// on any element type. Tables with duplicate keys are unsupported: which
/// duplicate matches first is unspecified.
///
/// Callers must supply at least 2 entries (a calibration table invariant;
/// see [`crate::table::CalibrationTable`]).
///
/// # Example
///
/// ```
/// use thermion_core::lut::{bracket_search, TableOrder};
///
/// let table = [(4000u32, -100i16), (2000, 0), (1000, 100)];
/// let bracket = bracket_search(&table, 1500, |e| e.0, TableOrder::Descending);
/// assert_eq!((bracket.lower, bracket.upper), (1, 2));
/// assert!(bracket.exact.is_none());
/// ```
pub fn bracket_search<E, K, F>(table: &[E], target: K, key_of: F, order: TableOrder) -> Bracket
where
    K: PartialOrd + Copy,
    F: Fn(&E) -> K,
{
    debug_assert!(table.len() >= 2, "bracket_search needs at least 2 entries");
    let len = table.len() as isize;

    // Tables too short to compare default to ascending.
    let ascending = match order {
        TableOrder::Ascending => true,
        TableOrder::Descending => false,
        TableOrder::Auto => table.len() < 2 || key_of(&table[0]) <= key_of(&table[1]),
    };

    // Signed bounds: the low-end collapse drives `right` to -1, which a
    // usize loop would wrap into an out-of-bounds probe.
    let mut left: isize = 0;
    let mut right: isize = len - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        let mid_key = key_of(&table[mid as usize]);

        if mid_key == target {
            return Bracket::exact_at(mid as usize);
        }

        // Invert the narrowing direction for descending tables.
        let go_left = if ascending {
            target < mid_key
        } else {
            target > mid_key
        };

        if go_left {
            right = mid - 1;
        } else {
            left = mid + 1;
        }
    }

    if left == 0 {
        // Target is beyond the first entry.
        #[cfg(feature = "defmt")]
        defmt::debug!("bracket_search: target below table start, clamping to [0, 1]");
        Bracket::clamped_edge(0, 1)
    } else if right >= len - 1 {
        // Target is beyond the last entry.
        #[cfg(feature = "defmt")]
        defmt::debug!("bracket_search: target past table end, clamping to edge pair");
        Bracket::clamped_edge((len - 2) as usize, (len - 1) as usize)
    } else {
        // The bounds crossed around the insertion point; the straddling
        // pair is [right, left] in table order.
        Bracket::between(right as usize, left as usize)
    }
}
