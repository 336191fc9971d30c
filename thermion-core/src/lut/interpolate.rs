//! Linear interpolation between bracketing entries

/// Interpolate linearly between two bracketing table entries
///
/// `low_*`/`high_*` refer to the bracket's table order as returned by
/// [`bracket_search`](super::bracket_search), not numeric magnitude, so
/// the same formula serves ascending and descending tables:
///
/// ```text
/// value = low_value + (high_value - low_value) * (low_key - target) / (low_key - high_key)
/// ```
///
/// For an NTC table this is the familiar
/// `t = t_cold + (t_hot - t_cold) * (r_cold - r) / (r_cold - r_hot)`.
///
/// Intermediates are carried in `i64`, wide enough that x10 resistance
/// keys (up to `u32::MAX`) times x10 temperature deltas cannot overflow.
/// The result is narrowed back to `i16` with saturation; callers clamp to
/// their table's output span on top of this.
///
/// Equal bracket keys cannot be interpolated (the division would be by
/// zero); the low value is returned directly.
pub fn interpolate(target: u32, low_key: u32, high_key: u32, low_value: i16, high_value: i16) -> i16 {
    if low_key == high_key {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "interpolate: degenerate bracket, both keys {}, returning low value",
            low_key
        );
        return low_value;
    }

    let delta_value = high_value as i64 - low_value as i64;
    let key_span = low_key as i64 - high_key as i64;
    let key_offset = low_key as i64 - target as i64;

    let value = low_value as i64 + delta_value * key_offset / key_span;

    value.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_exactness() {
        // Descending bracket: 500.0 Ω @ 20.0 °C down to 400.0 Ω @ 30.0 °C
        assert_eq!(interpolate(5_000, 5_000, 4_000, 200, 300), 200);
        assert_eq!(interpolate(4_000, 5_000, 4_000, 200, 300), 300);

        // Ascending bracket behaves the same through the shared formula
        assert_eq!(interpolate(4_000, 4_000, 5_000, 300, 200), 300);
        assert_eq!(interpolate(5_000, 4_000, 5_000, 300, 200), 200);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(interpolate(4_500, 5_000, 4_000, 200, 300), 250);
    }

    #[test]
    fn test_quarter_points() {
        assert_eq!(interpolate(4_750, 5_000, 4_000, 200, 300), 225);
        assert_eq!(interpolate(4_250, 5_000, 4_000, 200, 300), 275);
    }

    #[test]
    fn test_negative_span() {
        // -40.0 °C to -39.0 °C leg of an NTC table: offset 140_247 of a
        // 280_495 span is 4.9999 tenths, truncating to 4
        assert_eq!(interpolate(3_878_350, 4_018_597, 3_738_102, -400, -390), -396);
        // Exact division point: offset 140_250 into 280_500 over a
        // 2-tenth swing lands on the midpoint with no remainder
        assert_eq!(interpolate(3_878_350, 4_018_600, 3_738_100, -400, -380), -390);
    }

    #[test]
    fn test_degenerate_bracket_returns_low() {
        assert_eq!(interpolate(1_234, 5_000, 5_000, 200, 300), 200);
    }

    #[test]
    fn test_wide_keys_do_not_overflow() {
        // Full-range u32 keys with a full-range i16 value swing
        assert_eq!(interpolate(u32::MAX / 2, u32::MAX, 0, -400, 400), 0);
        assert_eq!(interpolate(0, u32::MAX, 0, -400, 400), 400);
    }
}
