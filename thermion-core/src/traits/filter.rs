//! Smoothing filter trait

/// Stateful smoothing filter
///
/// Implementations own their state exclusively; `apply` both updates the
/// state and returns the smoothed value, so no partial application is
/// observable from outside.
pub trait Filter<T> {
    /// Feed one new value, return the smoothed output
    fn apply(&mut self, new_value: T) -> T;
}

/// Identity filter for unfiltered pipelines
///
/// Stands in for "no filter attached" without an `Option` branch in the
/// read path.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoFilter;

impl<T> Filter<T> for NoFilter {
    #[inline]
    fn apply(&mut self, new_value: T) -> T {
        new_value
    }
}
