//! Report data structures.
//!
//! The serializable mirror of a `ResultSet`: one row per registered
//! workload, in registration order, plus run metadata and a summary.

use algobench_core::{ResultSet, WorkloadOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete benchmark report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One row per workload, registration order.
    pub rows: Vec<WorkloadRow>,
    /// Aggregate counts.
    pub summary: ReportSummary,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Tool version.
    pub version: String,
    /// When the pass finished.
    pub timestamp: DateTime<Utc>,
    /// Configured repetitions per workload batch.
    pub repetitions: u32,
    /// Seed used by the input generator.
    pub seed: u64,
}

/// Per-workload outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadStatus {
    /// The repetition batch completed and was timed.
    Measured,
    /// The trial function panicked.
    Failed,
}

/// One workload's entry in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadRow {
    /// Workload name.
    pub name: String,
    /// Outcome status.
    pub status: WorkloadStatus,
    /// Configured repetitions for the batch.
    pub repetitions: u32,
    /// Total elapsed time for the batch, nanoseconds. `None` on failure.
    pub elapsed_ns: Option<u64>,
    /// Mean time per trial, nanoseconds. `None` on failure.
    pub mean_ns: Option<f64>,
    /// Failure reason, present only on failure.
    pub failure: Option<String>,
}

/// Aggregate counts over the whole pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total registered workloads.
    pub total_workloads: usize,
    /// Workloads that measured cleanly.
    pub measured: usize,
    /// Workloads whose trial panicked.
    pub failed: usize,
    /// Wall-clock duration of the whole pass, milliseconds.
    pub total_duration_ms: f64,
}

/// Build a `Report` from an orchestration pass's `ResultSet`.
pub fn build_report(
    results: &ResultSet,
    repetitions: u32,
    seed: u64,
    total_duration_ms: f64,
) -> Report {
    let rows: Vec<WorkloadRow> = results
        .iter()
        .map(|outcome| match outcome {
            WorkloadOutcome::Measured(m) => {
                let elapsed_ns = m.elapsed.as_nanos() as u64;
                WorkloadRow {
                    name: m.name.clone(),
                    status: WorkloadStatus::Measured,
                    repetitions: m.repetitions,
                    elapsed_ns: Some(elapsed_ns),
                    mean_ns: Some(elapsed_ns as f64 / m.repetitions as f64),
                    failure: None,
                }
            }
            WorkloadOutcome::Failed { name, error } => WorkloadRow {
                name: name.clone(),
                status: WorkloadStatus::Failed,
                repetitions,
                elapsed_ns: None,
                mean_ns: None,
                failure: Some(error.clone()),
            },
        })
        .collect();

    let summary = ReportSummary {
        total_workloads: rows.len(),
        measured: results.measured_count(),
        failed: results.failed_count(),
        total_duration_ms,
    };

    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            repetitions,
            seed,
        },
        rows,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_core::Measurement;
    use std::time::Duration;

    fn sample_results() -> ResultSet {
        let mut results = ResultSet::new();
        results.push(WorkloadOutcome::Measured(Measurement {
            name: "fast".to_string(),
            repetitions: 100,
            elapsed: Duration::from_micros(200),
            mean: Duration::from_micros(2),
        }));
        results.push(WorkloadOutcome::Failed {
            name: "broken".to_string(),
            error: "trial panicked".to_string(),
        });
        results
    }

    #[test]
    fn builds_one_row_per_outcome_in_order() {
        let report = build_report(&sample_results(), 100, 7, 12.5);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].name, "fast");
        assert_eq!(report.rows[0].status, WorkloadStatus::Measured);
        assert_eq!(report.rows[0].elapsed_ns, Some(200_000));
        assert_eq!(report.rows[0].mean_ns, Some(2_000.0));
        assert_eq!(report.rows[1].name, "broken");
        assert_eq!(report.rows[1].status, WorkloadStatus::Failed);
        assert_eq!(report.rows[1].failure.as_deref(), Some("trial panicked"));

        assert_eq!(report.summary.total_workloads, 2);
        assert_eq!(report.summary.measured, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.meta.repetitions, 100);
        assert_eq!(report.meta.seed, 7);
    }
}
