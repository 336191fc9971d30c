//! Fixed-point arithmetic for filter coefficients
//!
//! Q16.16 format keeps the fractional smoothing coefficient and the
//! filter state in pure integer math, so the filters run the same on
//! cores without hardware floating point.

use core::ops::{Add, Sub};

/// Q16.16 fixed-point number
///
/// Range: approximately -32768.0 to +32767.99998, resolution about
/// 0.000015. Used for the EMA coefficient and its running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fixed32(i32);

impl Fixed32 {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(1 << 16);

    /// Fractional bits (16)
    pub const FRAC_BITS: u32 = 16;

    /// Create from a whole integer
    #[inline]
    pub const fn from_int(n: i16) -> Self {
        Self((n as i32) << Self::FRAC_BITS)
    }

    /// Create from a scaled integer (value x100)
    ///
    /// Lets configs carry "0.15" as `15` without touching floats.
    #[inline]
    pub const fn from_scaled_100(n: i32) -> Self {
        Self((n << Self::FRAC_BITS) / 100)
    }

    /// Convert to a whole integer, truncating the fractional part
    ///
    /// The shift is arithmetic, so negative values truncate toward
    /// negative infinity.
    #[inline]
    pub const fn to_int(self) -> i16 {
        (self.0 >> Self::FRAC_BITS) as i16
    }

    /// Multiply two fixed-point numbers
    ///
    /// Widens to i64 before narrowing, so intermediate products cannot
    /// overflow.
    #[inline]
    pub fn mul(self, other: Self) -> Self {
        let product = ((self.0 as i64) * (other.0 as i64)) >> Self::FRAC_BITS;
        Self(product as i32)
    }

    /// The raw i32 representation
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl Add for Fixed32 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }
}

impl Sub for Fixed32 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }
}

impl From<i16> for Fixed32 {
    fn from(n: i16) -> Self {
        Self::from_int(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_round_trip() {
        assert_eq!(Fixed32::from_int(0).to_int(), 0);
        assert_eq!(Fixed32::from_int(250).to_int(), 250);
        assert_eq!(Fixed32::from_int(-400).to_int(), -400);
    }

    #[test]
    fn test_from_scaled_100() {
        assert_eq!(Fixed32::from_scaled_100(100), Fixed32::ONE);
        assert_eq!(Fixed32::from_scaled_100(150).to_int(), 1); // 1.5 truncates
        assert_eq!(Fixed32::from_scaled_100(50).raw(), 1 << 15); // exactly 0.5
    }

    #[test]
    fn test_mul() {
        let half = Fixed32::from_scaled_100(50);
        assert_eq!(Fixed32::from_int(10).mul(half).to_int(), 5);
        assert_eq!(half.mul(Fixed32::ONE), half);
        // Product of two large values needs the i64 widening
        let big = Fixed32::from_int(181);
        assert_eq!(big.mul(big).to_int(), 32_761);
    }

    #[test]
    fn test_add_sub() {
        let a = Fixed32::from_int(30);
        let b = Fixed32::from_int(12);
        assert_eq!((a + b).to_int(), 42);
        assert_eq!((a - b).to_int(), 18);
    }
}
