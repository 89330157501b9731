//! Chart artifact.
//!
//! Renders a self-contained HTML file with an SVG bar chart of mean
//! trial durations. No external assets, so the file can be archived or
//! attached to CI artifacts as-is. Failed workloads are listed under
//! the chart with their failure reason.

use crate::format_duration;
use crate::report::{Report, WorkloadStatus};

const BAR_HEIGHT: u32 = 24;
const BAR_GAP: u32 = 10;
const LABEL_WIDTH: u32 = 220;
const BAR_MAX_WIDTH: u32 = 560;

/// Render the report as a single-file HTML chart.
pub fn generate_chart_report(report: &Report) -> String {
    let measured: Vec<_> = report
        .rows
        .iter()
        .filter(|r| r.status == WorkloadStatus::Measured)
        .collect();

    let max_mean = measured
        .iter()
        .filter_map(|r| r.mean_ns)
        .fold(0.0f64, f64::max);

    let svg_height = (measured.len() as u32) * (BAR_HEIGHT + BAR_GAP) + BAR_GAP;
    let svg_width = LABEL_WIDTH + BAR_MAX_WIDTH + 120;

    let mut svg = String::new();
    for (i, row) in measured.iter().enumerate() {
        let mean = row.mean_ns.unwrap_or(0.0);
        let width = if max_mean > 0.0 {
            ((mean / max_mean) * BAR_MAX_WIDTH as f64).max(1.0) as u32
        } else {
            1
        };
        let y = BAR_GAP + (i as u32) * (BAR_HEIGHT + BAR_GAP);
        let text_y = y + BAR_HEIGHT / 2 + 5;
        svg.push_str(&format!(
            "  <text x=\"{x}\" y=\"{text_y}\" text-anchor=\"end\" \
             font-family=\"monospace\" font-size=\"13\">{name}</text>\n",
            x = LABEL_WIDTH - 8,
            name = row.name,
        ));
        svg.push_str(&format!(
            "  <rect x=\"{LABEL_WIDTH}\" y=\"{y}\" width=\"{width}\" \
             height=\"{BAR_HEIGHT}\" fill=\"#4878a8\"/>\n",
        ));
        svg.push_str(&format!(
            "  <text x=\"{x}\" y=\"{text_y}\" font-family=\"monospace\" \
             font-size=\"13\">{label}</text>\n",
            x = LABEL_WIDTH + width + 8,
            label = format_duration(mean),
        ));
    }

    let mut failures = String::new();
    for row in &report.rows {
        if row.status == WorkloadStatus::Failed {
            failures.push_str(&format!(
                "    <li><code>{}</code>: {}</li>\n",
                row.name,
                row.failure.as_deref().unwrap_or("unknown failure")
            ));
        }
    }
    let failure_block = if failures.is_empty() {
        String::new()
    } else {
        format!("  <h2>Failed workloads</h2>\n  <ul>\n{failures}  </ul>\n")
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AlgoBench Results</title>\n</head>\n<body>\n\
         <h1>AlgoBench Results</h1>\n\
         <p>{total} workloads, {reps} repetitions each, mean time per trial.</p>\n\
         <svg width=\"{svg_width}\" height=\"{svg_height}\" \
         xmlns=\"http://www.w3.org/2000/svg\">\n{svg}</svg>\n{failure_block}\
         </body>\n</html>\n",
        total = report.summary.total_workloads,
        reps = report.meta.repetitions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportMeta, ReportSummary, WorkloadRow};
    use chrono::Utc;

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
    fn chart_contains_bars_for_measured_rows() {
        let html = generate_chart_report(&report(vec![
            WorkloadRow {
                name: "fib_iter".to_string(),
                status: WorkloadStatus::Measured,
                repetitions: 100,
                elapsed_ns: Some(100_000),
                mean_ns: Some(1_000.0),
                failure: None,
            },
            WorkloadRow {
                name: "fib_rec".to_string(),
                status: WorkloadStatus::Measured,
                repetitions: 100,
                elapsed_ns: Some(400_000),
                mean_ns: Some(4_000.0),
                failure: None,
            },
        ]));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<svg"));
        assert_eq!(html.matches("<rect").count(), 2);
        assert!(html.contains("fib_iter"));
        assert!(html.contains("fib_rec"));
    }

    #[test]
    fn failed_rows_listed_without_bars() {
        let html = generate_chart_report(&report(vec![WorkloadRow {
            name: "broken".to_string(),
            status: WorkloadStatus::Failed,
            repetitions: 100,
            elapsed_ns: None,
            mean_ns: None,
            failure: Some("boom".to_string()),
        }]));

        assert_eq!(html.matches("<rect").count(), 0);
        assert!(html.contains("Failed workloads"));
        assert!(html.contains("<code>broken</code>: boom"));
    }
}
