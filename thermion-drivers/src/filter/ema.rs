//! Exponential moving average filter
//!
//! First-order IIR low-pass: every output depends on the whole input
//! history, weighted by the smoothing coefficient, with O(1) state.
//!
//! ```text
//! y = (1 - alpha) * y_prev + alpha * x      (0 < alpha <= 1)
//! ```
//!
//! `alpha` near 0 smooths aggressively and tracks slowly; `alpha` of 1
//! disables the memory entirely.

use super::fixed::Fixed32;
use thermion_core::traits::Filter;

/// Fallback coefficient (0.50) when an invalid one is configured
pub const ALPHA_FALLBACK_X100: u8 = 50;

/// EMA filter configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmaConfig {
    /// Smoothing coefficient x100, valid range 1..=100 (0.01 to 1.0).
    /// Out-of-range values fall back to [`ALPHA_FALLBACK_X100`].
    pub alpha_x100: u8,
    /// Seed for the filter state, x10 units
    pub initial_x10: i16,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self {
            alpha_x100: 15, // gentle smoothing for slow thermal signals
            initial_x10: 0,
        }
    }
}

/// Exponential moving average over x10 temperatures
///
/// State is a single Q16.16 value; the fractional part is kept between
/// calls so repeated small corrections are not truncated away.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmaFilter {
    alpha: Fixed32,
    prev: Fixed32,
}

impl EmaFilter {
    /// Create a filter, sanitizing the coefficient
    ///
    /// A coefficient outside `(0, 1]` is replaced with 0.50.
    pub fn new(config: EmaConfig) -> Self {
        let alpha_x100 = if config.alpha_x100 == 0 || config.alpha_x100 > 100 {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "EmaFilter: invalid alpha_x100 {}, falling back to {}",
                config.alpha_x100,
                ALPHA_FALLBACK_X100
            );
            ALPHA_FALLBACK_X100
        } else {
            config.alpha_x100
        };

        Self {
            alpha: Fixed32::from_scaled_100(alpha_x100 as i32),
            prev: Fixed32::from_int(config.initial_x10),
        }
    }

    /// The effective smoothing coefficient (after fallback)
    pub fn alpha(&self) -> Fixed32 {
        self.alpha
    }
}

impl Default for EmaFilter {
    fn default() -> Self {
        Self::new(EmaConfig::default())
    }
}

impl Filter<i16> for EmaFilter {
    fn apply(&mut self, new_value: i16) -> i16 {
        // y += alpha * (x - y), the update form of the defining formula.
        let input = Fixed32::from_int(new_value);
        self.prev = self.prev + self.alpha.mul(input - self.prev);
        self.prev.to_int()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_one_has_no_memory() {
        let mut filter = EmaFilter::new(EmaConfig {
            alpha_x100: 100,
            initial_x10: 0,
        });
        assert_eq!(filter.apply(250), 250);
        assert_eq!(filter.apply(-400), -400);
        assert_eq!(filter.apply(17), 17);
    }

    #[test]
    fn test_half_alpha_steps() {
        let mut filter = EmaFilter::new(EmaConfig {
            alpha_x100: 50,
            initial_x10: 0,
        });
        assert_eq!(filter.apply(100), 50);
        assert_eq!(filter.apply(100), 75);
        // 87.5 keeps its fraction in state but truncates on output
        assert_eq!(filter.apply(100), 87);
        assert_eq!(filter.apply(100), 93);
    }

    #[test]
    fn test_invalid_alpha_falls_back() {
        let invalid_zero = EmaFilter::new(EmaConfig {
            alpha_x100: 0,
            initial_x10: 0,
        });
        let invalid_big = EmaFilter::new(EmaConfig {
            alpha_x100: 255,
            initial_x10: 0,
        });
        let expected = Fixed32::from_scaled_100(ALPHA_FALLBACK_X100 as i32);
        assert_eq!(invalid_zero.alpha(), expected);
        assert_eq!(invalid_big.alpha(), expected);
    }

    #[test]
    fn test_small_alpha_converges_slowly() {
        let mut filter = EmaFilter::new(EmaConfig {
            alpha_x100: 15,
            initial_x10: 0,
        });

        let first = filter.apply(100);
        assert!(first < 20, "one step must not jump to the input");

        let mut last = first;
        for _ in 0..100 {
            let out = filter.apply(100);
            assert!(out >= last, "output must climb monotonically");
            last = out;
        }
        assert!(last >= 99, "long runs must approach the input, got {last}");
    }

    #[test]
    fn test_seed_value() {
        let mut filter = EmaFilter::new(EmaConfig {
            alpha_x100: 50,
            initial_x10: 200,
        });
        assert_eq!(filter.apply(300), 250);
    }
}
