#![warn(missing_docs)]
//! AlgoBench Core - Measurement Harness
//!
//! This crate provides the benchmark execution machinery:
//! - `WorkloadRegistry` holding named, zero-argument trial functions
//! - `run_trials` for timing a fixed repetition batch on a monotonic clock
//! - `Measurement` / `ResultSet` for collecting comparable results
//!
//! Workload implementations (the algorithms under test) live in
//! `algobench-algos`; the orchestration and reporting layers consume
//! the types exported here.

mod error;
mod measure;
mod registry;
mod result;
mod runner;

pub use error::BenchError;
pub use measure::Timer;
pub use registry::{Workload, WorkloadRegistry};
pub use result::{ResultSet, WorkloadOutcome};
pub use runner::{DEFAULT_REPETITIONS, Measurement, run_trials};
