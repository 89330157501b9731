#![warn(missing_docs)]
//! AlgoBench CLI
//!
//! Command-line surface for the harness. Wires the standard workload
//! catalog into the orchestrator, then renders the result set through
//! the requested exporters.
//!
//! ```sh
//! algobench                       # run everything, table to stdout
//! algobench -n 1000 -f csv -f chart
//! algobench 'fibonacci.*'        # regex filter over workload names
//! algobench list
//! ```

mod config;
mod executor;

pub use config::{BenchConfig, OutputConfig, RunnerConfig};
pub use executor::{run_all, run_selected};

use algobench_report::{
    OutputFormat, build_report, generate_chart_report, generate_csv_report, generate_json_report,
    render_table,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// AlgoBench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "algobench")]
#[command(author, version, about = "Iterative vs. recursive micro-benchmarks")]
pub struct Cli {
    /// Optional subcommand; defaults to running the full pass.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter workloads by regex pattern.
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Trials per workload batch.
    #[arg(short = 'n', long)]
    pub repetitions: Option<u32>,

    /// Output formats: table, csv, chart, json (repeatable).
    #[arg(short, long = "format")]
    pub formats: Vec<String>,

    /// Directory for file outputs (csv, chart, json).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Seed for the input generator.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the workload catalog without running it.
    List,
    /// Run the benchmark pass (default).
    Run,
}

/// Run the AlgoBench CLI. Entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the AlgoBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter_level = if cli.verbose {
        "algobench=debug"
    } else {
        "algobench=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter_level).init();

    // bench.toml supplies defaults; CLI flags override.
    let config = BenchConfig::discover().unwrap_or_default();
    let repetitions = cli.repetitions.unwrap_or(config.runner.repetitions);
    let seed = cli.seed.unwrap_or(config.runner.seed);
    let format_names = if cli.formats.is_empty() {
        config.output.formats.clone()
    } else {
        cli.formats.clone()
    };
    let formats = parse_formats(&format_names)?;
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));

    let registry = algobench_algos::standard_registry(seed)?;

    match cli.command {
        Some(Commands::List) => list_workloads(&cli, &registry),
        Some(Commands::Run) | None => run_benchmarks(
            &cli,
            &registry,
            repetitions,
            seed,
            &formats,
            &output_dir,
        ),
    }
}

fn parse_formats(names: &[String]) -> anyhow::Result<Vec<OutputFormat>> {
    names
        .iter()
        .map(|name| {
            name.parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!(e))
        })
        .collect()
}

fn compile_filter(pattern: &str) -> anyhow::Result<Regex> {
    Regex::new(pattern).with_context(|| format!("invalid filter pattern: {pattern}"))
}

fn list_workloads(
    cli: &Cli,
    registry: &algobench_core::WorkloadRegistry,
) -> anyhow::Result<()> {
    let filter = compile_filter(&cli.filter)?;
    println!("AlgoBench catalog:");
    let mut total = 0;
    for workload in registry.workloads() {
        if filter.is_match(workload.name()) {
            println!("  {}", workload.name());
            total += 1;
        }
    }
    println!("{total} workloads.");
    Ok(())
}

fn run_benchmarks(
    cli: &Cli,
    registry: &algobench_core::WorkloadRegistry,
    repetitions: u32,
    seed: u64,
    formats: &[OutputFormat],
    output_dir: &Path,
) -> anyhow::Result<()> {
    let filter = compile_filter(&cli.filter)?;
    let selected: Vec<_> = registry
        .workloads()
        .filter(|w| filter.is_match(w.name()))
        .collect();

    if selected.is_empty() {
        println!("No workloads match filter '{}'.", cli.filter);
        return Ok(());
    }

    info!(
        workloads = selected.len(),
        repetitions, seed, "starting benchmark pass"
    );

    let start = Instant::now();
    let results = run_selected(selected, repetitions)?;
    let total_duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = build_report(&results, repetitions, seed, total_duration_ms);

    for &format in formats {
        let Some(file_name) = format.file_name() else {
            print!("{}", render_table(&report));
            continue;
        };
        let rendered = match format {
            OutputFormat::Csv => generate_csv_report(&report)?,
            OutputFormat::Chart => generate_chart_report(&report),
            OutputFormat::Json => generate_json_report(&report)?,
            OutputFormat::Table => continue,
        };
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("cannot create output directory {}", output_dir.display()))?;
        let path = output_dir.join(file_name);
        std::fs::write(&path, rendered)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    // Individual workload failures are reported inline and do not force
    // a non-zero exit; only setup errors abort above.
    Ok(())
}
