//! Benchmark Orchestrator
//!
//! Drives one full pass: for every workload, in registration order,
//! invoke the trial runner and collect the outcome. A panicking trial
//! is caught at this boundary and recorded as a failure marker; the
//! pass continues with the next workload, so one broken workload never
//! aborts the batch.

use algobench_core::{
    BenchError, ResultSet, Workload, WorkloadOutcome, WorkloadRegistry, run_trials,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Run every workload in `registry` and collect outcomes in
/// registration order.
///
/// Fails fast with a configuration error on an empty registry or a
/// zero repetition count, before any timing begins.
pub fn run_all(registry: &WorkloadRegistry, repetitions: u32) -> Result<ResultSet, BenchError> {
    if registry.is_empty() {
        return Err(BenchError::EmptyRegistry);
    }
    run_selected(registry.workloads().collect(), repetitions)
}

/// Run a pre-selected (e.g. filtered) slice of the catalog.
pub fn run_selected(
    workloads: Vec<&Workload>,
    repetitions: u32,
) -> Result<ResultSet, BenchError> {
    if repetitions == 0 {
        return Err(BenchError::InvalidRepetitions { repetitions });
    }

    let progress = ProgressBar::new(workloads.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut results = ResultSet::with_capacity(workloads.len());
    for workload in workloads {
        progress.set_message(workload.name().to_string());
        results.push(measure_one(workload, repetitions));
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(results)
}

/// Time one workload's batch, converting a trial panic into a failure
/// marker.
fn measure_one(workload: &Workload, repetitions: u32) -> WorkloadOutcome {
    let name = workload.name().to_string();
    debug!(workload = %name, repetitions, "running repetition batch");

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_trials(workload, repetitions)
    }));

    match result {
        Ok(Ok(measurement)) => WorkloadOutcome::Measured(measurement),
        // Repetitions were validated up front; a runner error here is
        // still recorded rather than dropped.
        Ok(Err(e)) => WorkloadOutcome::Failed {
            name,
            error: e.to_string(),
        },
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            WorkloadOutcome::Failed {
                name,
                error: message,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_is_a_configuration_error() {
        let registry = WorkloadRegistry::new();
        let err = run_all(&registry, 100).unwrap_err();
        assert_eq!(err, BenchError::EmptyRegistry);
    }

    #[test]
    fn zero_repetitions_is_a_configuration_error() {
        let mut registry = WorkloadRegistry::new();
        registry.register("noop", || {}).unwrap();
        let err = run_all(&registry, 0).unwrap_err();
        assert_eq!(err, BenchError::InvalidRepetitions { repetitions: 0 });
    }

    #[test]
    fn panicking_workload_does_not_abort_the_batch() {
        let mut registry = WorkloadRegistry::new();
        registry.register("before", || {}).unwrap();
        registry
            .register("explodes", || panic!("intentional trial panic"))
            .unwrap();
        registry.register("after", || {}).unwrap();

        let results = run_all(&registry, 3).unwrap();

        assert_eq!(results.len(), 3);
        let names: Vec<&str> = results.iter().map(|o| o.name()).collect();
        assert_eq!(names, ["before", "explodes", "after"]);

        assert!(!results.outcomes()[0].is_failed());
        assert!(!results.outcomes()[2].is_failed());
        match &results.outcomes()[1] {
            WorkloadOutcome::Failed { name, error } => {
                assert_eq!(name, "explodes");
                assert!(error.contains("intentional trial panic"));
            }
            other => panic!("expected failure marker, got {other:?}"),
        }
    }

    #[test]
    fn one_measurement_per_workload_in_registration_order() {
        let mut registry = WorkloadRegistry::new();
        for name in ["z", "a", "m"] {
            registry.register(name, || {}).unwrap();
        }

        let results = run_all(&registry, 5).unwrap();
        let names: Vec<&str> = results.iter().map(|o| o.name()).collect();
        assert_eq!(names, ["z", "a", "m"], "execution order is registration order");
        for m in results.measurements() {
            assert_eq!(m.repetitions, 5);
        }
    }
}
