#![warn(missing_docs)]
//! AlgoBench Report - result rendering
//!
//! Converts a `ResultSet` into a serializable `Report` and renders it
//! to the supported output formats:
//! - human-readable summary table (terminal)
//! - CSV (spreadsheet-compatible)
//! - chart (self-contained HTML with an SVG bar chart)
//! - JSON (machine-readable)
//!
//! Every format exposes each workload's `{name, repetitions, elapsed,
//! mean}` tuple, and failed workloads appear with their failure reason
//! in every format.

mod chart;
mod csv_export;
mod json;
mod report;
mod table;

pub use chart::generate_chart_report;
pub use csv_export::generate_csv_report;
pub use json::generate_json_report;
pub use report::{
    Report, ReportMeta, ReportSummary, WorkloadRow, WorkloadStatus, build_report,
};
pub use table::render_table;

use thiserror::Error;

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    /// JSON serialization failed.
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
    /// The rendered bytes were not valid UTF-8.
    #[error("export produced invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Flushing the underlying writer failed.
    #[error("export i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal table.
    Table,
    /// CSV for spreadsheets.
    Csv,
    /// Single-file HTML chart artifact.
    Chart,
    /// JSON with the full report model.
    Json,
}

impl OutputFormat {
    /// File name used when this format is written to the output
    /// directory. The table goes to stdout and has no file.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Csv => Some("results.csv"),
            OutputFormat::Chart => Some("chart.html"),
            OutputFormat::Json => Some("report.json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "human" | "text" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "chart" | "html" => Ok(OutputFormat::Chart),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Format a nanosecond quantity with a readable unit.
pub fn format_duration(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{ns:.0} ns")
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_output_formats() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("chart".parse::<OutputFormat>().unwrap(), OutputFormat::Chart);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn formats_durations_by_magnitude() {
        assert_eq!(format_duration(420.0), "420 ns");
        assert_eq!(format_duration(1_500.0), "1.50 µs");
        assert_eq!(format_duration(2_500_000.0), "2.50 ms");
        assert_eq!(format_duration(3_200_000_000.0), "3.20 s");
    }
}
