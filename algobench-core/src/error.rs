//! Error taxonomy for the measurement harness.
//!
//! Setup-time errors (duplicate names, bad configuration) are fatal and
//! abort the whole run before any timing begins. A panicking trial is
//! not represented here: it propagates out of the trial runner and is
//! recorded by the orchestrator as a per-workload failure marker in the
//! `ResultSet`, never aborting the batch.

use thiserror::Error;

/// Errors raised while setting up or driving a benchmark pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Two workloads were registered under the same name. The registry
    /// retains the first registration.
    #[error("duplicate workload name: {name}")]
    DuplicateName {
        /// The name that was registered twice.
        name: String,
    },

    /// The configured repetition count cannot produce a meaningful
    /// measurement. Zero repetitions is rejected rather than reported
    /// as a zero-elapsed measurement with an undefined mean.
    #[error("repetitions must be at least 1 (got {repetitions})")]
    InvalidRepetitions {
        /// The rejected repetition count.
        repetitions: u32,
    },

    /// A benchmark pass was requested over a registry with no workloads.
    #[error("no workloads registered")]
    EmptyRegistry,
}
