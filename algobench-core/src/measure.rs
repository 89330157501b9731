//! Monotonic Timing
//!
//! Thin wrapper over `std::time::Instant`. A batch of repetitions is
//! bracketed by exactly one `start` and one `stop`, so the per-trial
//! timer overhead is amortized across the whole batch instead of being
//! paid on every invocation.

use std::time::{Duration, Instant};

/// Timer for measuring one repetition batch.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Capture the monotonic clock immediately before the first trial.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed wall-clock duration.
    #[inline(always)]
    pub fn stop(self) -> Duration {
        self.start.elapsed()
    }
}
