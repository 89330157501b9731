//! JSON output.

use crate::ExportError;
use crate::report::Report;

/// Serialize the full report model as prettified JSON.
pub fn generate_json_report(report: &Report) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Report, ReportMeta, ReportSummary, WorkloadRow, WorkloadStatus};
    use chrono::Utc;

    #[test]
    fn json_round_trips() {
        let report = Report {
            meta: ReportMeta {
                version: "test".to_string(),
                timestamp: Utc::now(),
                repetitions: 100,
                seed: 42,
            },
            rows: vec![WorkloadRow {
                name: "hanoi_iterative".to_string(),
                status: WorkloadStatus::Measured,
                repetitions: 100,
                elapsed_ns: Some(55_000),
                mean_ns: Some(550.0),
                failure: None,
            }],
            summary: ReportSummary {
                total_workloads: 1,
                measured: 1,
                failed: 0,
                total_duration_ms: 0.1,
            },
        };

        let json = generate_json_report(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].name, "hanoi_iterative");
        assert_eq!(parsed.rows[0].status, WorkloadStatus::Measured);
        assert_eq!(parsed.meta.seed, 42);
    }
}
