//! Generic lookup-table engine
//!
//! Bracketing binary search over any strictly monotonic table, plus the
//! linear interpolation applied between the bracketing entries. Both are
//! pure, allocation-free and total: every input produces a result.

pub mod bracket;
pub mod interpolate;

pub use bracket::{bracket_search, Bracket, TableOrder};
pub use interpolate::interpolate;
