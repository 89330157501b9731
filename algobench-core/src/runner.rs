//! Trial Runner
//!
//! Executes a single workload's trial function a fixed number of times
//! and measures the total elapsed time for the batch. Repetitions are
//! strictly sequential on the calling thread with no intervening work:
//! parallel execution would corrupt timing attribution and could race
//! on workload state.

use crate::error::BenchError;
use crate::measure::Timer;
use crate::registry::Workload;
use std::time::Duration;

/// Default number of trials per repetition batch.
pub const DEFAULT_REPETITIONS: u32 = 100;

/// Timing result for one workload's repetition batch.
///
/// Created by [`run_trials`], owned by the orchestrator, immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Name of the measured workload.
    pub name: String,
    /// How many trials the batch ran.
    pub repetitions: u32,
    /// Total elapsed wall-clock time for the whole batch.
    pub elapsed: Duration,
    /// Derived mean duration per trial (`elapsed / repetitions`).
    pub mean: Duration,
}

/// Run `workload`'s trial function exactly `repetitions` times and
/// measure the batch.
///
/// The monotonic clock is read immediately before the first invocation
/// and immediately after the last. Zero repetitions is rejected with
/// [`BenchError::InvalidRepetitions`] so a mean is always defined.
///
/// A panicking trial is not suppressed here; it unwinds to the caller,
/// which decides the per-workload failure policy.
pub fn run_trials(workload: &Workload, repetitions: u32) -> Result<Measurement, BenchError> {
    if repetitions == 0 {
        return Err(BenchError::InvalidRepetitions { repetitions });
    }

    let timer = Timer::start();
    for _ in 0..repetitions {
        workload.run_trial();
    }
    let elapsed = timer.stop();

    Ok(Measurement {
        name: workload.name().to_string(),
        repetitions,
        elapsed,
        mean: elapsed / repetitions,
    })
}
