//! Frame timestamp sources

use std::time::Instant;

/// Produces a millisecond timestamp for the current frame
pub trait TimeSource {
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock source backed by [`Instant`], zeroed at construction
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven source for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: f64,
}

impl ManualTime {
    pub fn new(start_ms: f64) -> Self {
        Self { now: start_ms }
    }

    /// Move time forward by `ms` (negative steps are ignored)
    pub fn advance(&mut self, ms: f64) {
        self.now += ms.max(0.0);
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&mut self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_time() {
        let mut time = ManualTime::new(10.0);
        assert_eq!(time.now_ms(), 10.0);
        time.advance(16.0);
        time.advance(-5.0);
        assert_eq!(time.now_ms(), 26.0);
    }

    #[test]
    fn test_monotonic_time_does_not_go_back() {
        let mut time = MonotonicTime::new();
        let a = time.now_ms();
        let b = time.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
