//! Human-readable summary table.
//!
//! Renders per-workload rows followed by an iterative-vs-recursive
//! speedup section for every algorithm where both variants measured.

use crate::format_duration;
use crate::report::{Report, WorkloadRow, WorkloadStatus};

/// Render the report as a terminal-friendly table.
pub fn render_table(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("AlgoBench Results\n");
    output.push_str(&"=".repeat(64));
    output.push('\n');
    output.push_str(&format!(
        "{} workloads, {} repetitions each\n\n",
        report.summary.total_workloads, report.meta.repetitions
    ));

    let name_width = report
        .rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(20);

    output.push_str(&format!(
        "  {:<width$}  {:>12}  {:>12}  {:>6}\n",
        "Workload",
        "Total",
        "Mean",
        "Reps",
        width = name_width + 2
    ));
    output.push_str(&format!("  {}\n", "-".repeat(name_width + 40)));

    for row in &report.rows {
        match row.status {
            WorkloadStatus::Measured => {
                output.push_str(&format!(
                    "  ✓ {:<width$}  {:>12}  {:>12}  {:>6}\n",
                    row.name,
                    format_duration(row.elapsed_ns.unwrap_or(0) as f64),
                    format_duration(row.mean_ns.unwrap_or(0.0)),
                    row.repetitions,
                    width = name_width
                ));
            }
            WorkloadStatus::Failed => {
                output.push_str(&format!(
                    "  ✗ {:<width$}  failed: {}\n",
                    row.name,
                    row.failure.as_deref().unwrap_or("unknown failure"),
                    width = name_width
                ));
            }
        }
    }

    let speedups = speedup_lines(&report.rows);
    if !speedups.is_empty() {
        output.push('\n');
        output.push_str("Iterative vs. recursive\n");
        output.push_str(&"-".repeat(64));
        output.push('\n');
        for line in speedups {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "{} measured, {} failed in {:.1} ms\n",
        report.summary.measured, report.summary.failed, report.summary.total_duration_ms
    ));

    output
}

/// Pair `<algo>_iterative` / `<algo>_recursive` rows and compute how
/// many times slower recursion was.
fn speedup_lines(rows: &[WorkloadRow]) -> Vec<String> {
    let mean_of = |name: &str| {
        rows.iter()
            .find(|r| r.name == name && r.status == WorkloadStatus::Measured)
            .and_then(|r| r.mean_ns)
    };

    let mut lines = Vec::new();
    for row in rows {
        let Some(algo) = row.name.strip_suffix("_iterative") else {
            continue;
        };
        let (Some(iter_mean), Some(rec_mean)) =
            (mean_of(&row.name), mean_of(&format!("{algo}_recursive")))
        else {
            continue;
        };
        if iter_mean <= 0.0 {
            continue;
        }
        lines.push(format!(
            "  {:<12}  recursive/iterative = {:.2}x  ({} vs {})",
            algo,
            rec_mean / iter_mean,
            format_duration(rec_mean),
            format_duration(iter_mean),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportMeta, ReportSummary};
    use chrono::Utc;

    fn row(name: &str, mean_ns: f64) -> WorkloadRow {
        WorkloadRow {
            name: name.to_string(),
            status: WorkloadStatus::Measured,
            repetitions: 100,
            elapsed_ns: Some((mean_ns * 100.0) as u64),
            mean_ns: Some(mean_ns),
            failure: None,
        }
    }

    fn report(rows: Vec<WorkloadRow>) -> Report {
        let summary = ReportSummary {
            total_workloads: rows.len(),
            measured: rows
                .iter()
                .filter(|r| r.status == WorkloadStatus::Measured)
                .count(),
            failed: rows
                .iter()
                .filter(|r| r.status == WorkloadStatus::Failed)
                .count(),
            total_duration_ms: 1.0,
        };
        Report {
            meta: ReportMeta {
                version: "test".to_string(),
                timestamp: Utc::now(),
                repetitions: 100,
                seed: 0,
            },
            rows,
            summary,
        }
    }

    #[test]
    fn lists_every_workload() {
        let rendered = render_table(&report(vec![
            row("factorial_iterative", 100.0),
            row("factorial_recursive", 250.0),
            WorkloadRow {
                name: "broken".to_string(),
                status: WorkloadStatus::Failed,
                repetitions: 100,
                elapsed_ns: None,
                mean_ns: None,
                failure: Some("boom".to_string()),
            },
        ]));

        assert!(rendered.contains("factorial_iterative"));
        assert!(rendered.contains("factorial_recursive"));
        assert!(rendered.contains("broken"));
        assert!(rendered.contains("failed: boom"));
    }

    #[test]
    fn pairs_variants_into_speedups() {
        let rendered = render_table(&report(vec![
            row("fibonacci_iterative", 10.0),
            row("fibonacci_recursive", 40.0),
        ]));
        assert!(rendered.contains("recursive/iterative = 4.00x"));
    }

    #[test]
    fn unpaired_rows_get_no_speedup_line() {
        let rendered = render_table(&report(vec![row("hanoi_iterative", 10.0)]));
        assert!(!rendered.contains("recursive/iterative"));
    }
}
