//! Simulation clock
//!
//! The only place frame timestamps are turned into elapsed time. Every timer
//! in the session is driven by the deltas produced here.

use serde::{Deserialize, Serialize};

/// Converts successive frame timestamps (ms) into non-negative deltas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Timestamp of the previous frame, `None` until the first tick
    last_ms: Option<f64>,
}

impl SimClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Record `now_ms` and return the time since the previous call.
    ///
    /// The first call returns 0. Timestamps that go backwards (or are not
    /// finite) yield 0 and the baseline is left on the latest usable value.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let delta = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(match self.last_ms {
            Some(last) => last.max(now_ms),
            None => now_ms,
        });
        delta
    }

    /// Re-sample the baseline without producing a delta
    pub fn rebase(&mut self, now_ms: f64) {
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
    }

    /// Timestamp of the most recent tick or rebase
    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = SimClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
        assert_eq!(clock.last_ms(), Some(12_345.0));
    }

    #[test]
    fn test_deltas() {
        let mut clock = SimClock::new();
        clock.tick(1000.0);
        assert_eq!(clock.tick(1016.5), 16.5);
        assert_eq!(clock.tick(1050.0), 33.5);
    }

    #[test]
    fn test_backwards_time_clamps_to_zero() {
        let mut clock = SimClock::new();
        clock.tick(1000.0);
        assert_eq!(clock.tick(900.0), 0.0);
        // Baseline stays at the latest timestamp seen
        assert_eq!(clock.tick(1010.0), 10.0);
    }

    #[test]
    fn test_non_finite_is_ignored() {
        let mut clock = SimClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert_eq!(clock.tick(f64::INFINITY), 0.0);
        assert_eq!(clock.tick(120.0), 20.0);
    }

    #[test]
    fn test_rebase() {
        let mut clock = SimClock::new();
        clock.tick(100.0);
        clock.rebase(500.0);
        assert_eq!(clock.tick(516.0), 16.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn delta_never_negative(stamps in proptest::collection::vec(-1.0e6f64..1.0e6, 1..64)) {
                let mut clock = SimClock::new();
                for stamp in stamps {
                    prop_assert!(clock.tick(stamp) >= 0.0);
                }
            }
        }
    }
}
