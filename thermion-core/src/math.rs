//! Overflow-safe integer math helpers
//!
//! Small pure functions shared by the conversion stages. Everything here
//! is total: division by zero and range inversions are handled by
//! returning the nearest defensible value instead of panicking.

use core::ops::Sub;

/// Clamp `value` into `[min, max]`
///
/// Callers are responsible for `min <= max`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Absolute difference of two values, without signed overflow
///
/// Works for unsigned types where `a - b` would wrap.
#[inline]
pub fn abs_diff<T: PartialOrd + Sub<Output = T>>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Remap `value` from one range to another by linear interpolation
///
/// The input is clamped to the source range first; the intermediate
/// products are carried in `i64` so full-range `i32` endpoints cannot
/// overflow. A degenerate source range returns `target_min`.
pub fn remap(value: i32, source_min: i32, source_max: i32, target_min: i32, target_max: i32) -> i32 {
    if source_min == source_max {
        return target_min;
    }

    let value = clamp(value, source_min, source_max);

    let scaled = (value as i64 - source_min as i64) * (target_max as i64 - target_min as i64)
        / (source_max as i64 - source_min as i64);

    target_min + scaled as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
        assert_eq!(clamp(-450i16, -400, 400), -400);
    }

    #[test]
    fn test_abs_diff() {
        assert_eq!(abs_diff(10u32, 3), 7);
        assert_eq!(abs_diff(3u32, 10), 7);
        assert_eq!(abs_diff(0u16, 1023), 1023);
        assert_eq!(abs_diff(7i16, 7), 0);
    }

    #[test]
    fn test_remap_basic() {
        // 0..1024 counts onto 0..5000 mV
        assert_eq!(remap(0, 0, 1024, 0, 5000), 0);
        assert_eq!(remap(512, 0, 1024, 0, 5000), 2500);
        assert_eq!(remap(1024, 0, 1024, 0, 5000), 5000);
    }

    #[test]
    fn test_remap_clamps_input() {
        assert_eq!(remap(2000, 0, 1024, 0, 5000), 5000);
        assert_eq!(remap(-5, 0, 1024, 0, 5000), 0);
    }

    #[test]
    fn test_remap_degenerate_source() {
        assert_eq!(remap(7, 3, 3, 100, 200), 100);
    }

    #[test]
    fn test_remap_wide_ranges() {
        // Full i32 span would overflow 32-bit intermediates
        assert_eq!(remap(0, i32::MIN, i32::MAX, -1000, 1000), 0);
        assert_eq!(remap(i32::MAX, i32::MIN, i32::MAX, -1000, 1000), 1000);
    }

    #[test]
    fn test_remap_inverted_target() {
        assert_eq!(remap(0, 0, 10, 100, 0), 100);
        assert_eq!(remap(10, 0, 10, 100, 0), 0);
    }
}
