//! Incremental moving average filter
//!
//! Approximates a simple moving average without storing the window:
//!
//! ```text
//! y = y_prev + (x - y_prev) / window
//! ```
//!
//! This is deliberately not a literal last-N-samples average: it keeps
//! O(1) state at the cost of slower, asymptotic convergence toward a new
//! mean. An accepted trade-off for memory-constrained targets.

use thermion_core::traits::Filter;

/// SMA filter configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmaConfig {
    /// Effective memory length, min 1 (0 falls back to 1)
    pub window: u8,
    /// Seed for the running average, x10 units
    pub initial_x10: i16,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            window: 8,
            initial_x10: 0,
        }
    }
}

/// Incremental moving average over x10 temperatures
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmaFilter {
    window: u8,
    prev_avg: i16,
}

impl SmaFilter {
    /// Create a filter, sanitizing the window size
    pub fn new(config: SmaConfig) -> Self {
        let window = if config.window == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("SmaFilter: window 0, falling back to 1");
            1
        } else {
            config.window
        };

        Self {
            window,
            prev_avg: config.initial_x10,
        }
    }

    /// The effective window size (after fallback)
    pub fn window(&self) -> u8 {
        self.window
    }
}

impl Default for SmaFilter {
    fn default() -> Self {
        Self::new(SmaConfig::default())
    }
}

impl Filter<i16> for SmaFilter {
    fn apply(&mut self, new_value: i16) -> i16 {
        // i32 math: the x10 delta can exceed i16 when the average and a
        // fault-adjacent reading sit at opposite range ends.
        let delta = (new_value as i32 - self.prev_avg as i32) / self.window as i32;
        self.prev_avg = (self.prev_avg as i32 + delta) as i16;
        self.prev_avg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_one_is_identity() {
        let mut filter = SmaFilter::new(SmaConfig {
            window: 1,
            initial_x10: 0,
        });
        assert_eq!(filter.apply(250), 250);
        assert_eq!(filter.apply(-100), -100);
    }

    #[test]
    fn test_zero_window_falls_back() {
        let filter = SmaFilter::new(SmaConfig {
            window: 0,
            initial_x10: 0,
        });
        assert_eq!(filter.window(), 1);
    }

    #[test]
    fn test_incremental_steps() {
        let mut filter = SmaFilter::new(SmaConfig {
            window: 4,
            initial_x10: 0,
        });
        assert_eq!(filter.apply(100), 25);
        assert_eq!(filter.apply(100), 43); // 25 + 75/4
        assert_eq!(filter.apply(100), 57); // 43 + 57/4
    }

    #[test]
    fn test_asymptotic_convergence() {
        // The approximation stalls once the remaining delta is below the
        // window size; it approaches but need not reach the input.
        let mut filter = SmaFilter::new(SmaConfig {
            window: 4,
            initial_x10: 0,
        });
        let mut last = 0;
        for _ in 0..64 {
            last = filter.apply(100);
        }
        assert!(last >= 97, "expected near-convergence, got {last}");
        assert_eq!(filter.apply(100), last, "stalled state must be stable");
    }

    #[test]
    fn test_steady_input_is_fixed_point() {
        let mut filter = SmaFilter::new(SmaConfig {
            window: 8,
            initial_x10: 240,
        });
        assert_eq!(filter.apply(240), 240);
    }

    #[test]
    fn test_extreme_swing_does_not_overflow() {
        let mut filter = SmaFilter::new(SmaConfig {
            window: 2,
            initial_x10: i16::MIN + 1,
        });
        // Delta of ~65534 overflows i16; the i32 path must survive it
        // and land on the midpoint.
        assert_eq!(filter.apply(i16::MAX), 0);
    }
}
