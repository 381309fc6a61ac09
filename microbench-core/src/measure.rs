//! High-Precision Timing
//!
//! Wraps the platform's monotonic clock (`std::time::Instant`). A `Timer` is
//! started fresh for every timed invocation so no state carries between runs.

use std::time::{Duration, Instant};

/// Timer for measuring a single benchmark iteration
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since `start`
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed whole microseconds since `start`, saturating at `u64::MAX`
    #[inline(always)]
    pub fn stop_micros(&self) -> u64 {
        u64::try_from(self.stop().as_micros()).unwrap_or(u64::MAX)
    }
}
