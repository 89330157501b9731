//! CSV output.
//!
//! Same fields as the summary table: name, status, repetitions, total
//! elapsed, mean, failure reason. Durations stay in nanoseconds so the
//! file round-trips into spreadsheets without unit parsing.

use crate::ExportError;
use crate::report::Report;

/// Render the report as CSV.
pub fn generate_csv_report(report: &Report) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "name",
        "status",
        "repetitions",
        "elapsed_ns",
        "mean_ns",
        "failure",
    ])?;

    for row in &report.rows {
        writer.write_record([
            row.name.as_str(),
            match row.status {
                crate::report::WorkloadStatus::Measured => "measured",
                crate::report::WorkloadStatus::Failed => "failed",
            },
            &row.repetitions.to_string(),
            &row.elapsed_ns.map(|v| v.to_string()).unwrap_or_default(),
            &row.mean_ns.map(|v| format!("{v:.3}")).unwrap_or_default(),
            row.failure.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
