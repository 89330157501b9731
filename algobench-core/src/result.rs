//! Result Model
//!
//! One orchestration pass produces a `ResultSet`: an ordered sequence
//! with exactly one entry per registered workload, in registration
//! order. A workload that measured cleanly contributes a `Measurement`;
//! a workload whose trial panicked contributes a failure marker instead,
//! so the final report can always list every registered workload.

use crate::runner::Measurement;

/// Outcome of one workload's repetition batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkloadOutcome {
    /// The batch completed and was timed.
    Measured(Measurement),
    /// The trial function panicked; the workload is excluded from
    /// successful measurements but stays in the result set.
    Failed {
        /// Name of the failed workload.
        name: String,
        /// Captured panic message.
        error: String,
    },
}

impl WorkloadOutcome {
    /// The workload name, regardless of outcome.
    pub fn name(&self) -> &str {
        match self {
            WorkloadOutcome::Measured(m) => &m.name,
            WorkloadOutcome::Failed { name, .. } => name,
        }
    }

    /// The measurement, if the batch completed.
    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            WorkloadOutcome::Measured(m) => Some(m),
            WorkloadOutcome::Failed { .. } => None,
        }
    }

    /// Whether this outcome is a failure marker.
    pub fn is_failed(&self) -> bool {
        matches!(self, WorkloadOutcome::Failed { .. })
    }
}

/// Ordered collection of outcomes from one orchestration pass.
///
/// Read-only after the pass completes; handed by reference to the
/// exporters.
#[derive(Debug, Default)]
pub struct ResultSet {
    outcomes: Vec<WorkloadOutcome>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result set with room for `capacity` outcomes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    /// Append the next workload's outcome.
    pub fn push(&mut self, outcome: WorkloadOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes in registration/execution order.
    pub fn outcomes(&self) -> &[WorkloadOutcome] {
        &self.outcomes
    }

    /// Iterate over outcomes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkloadOutcome> {
        self.outcomes.iter()
    }

    /// Successful measurements in order, skipping failures.
    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.outcomes.iter().filter_map(|o| o.measurement())
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the set holds no outcomes.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Count of workloads that measured cleanly.
    pub fn measured_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failed()).count()
    }

    /// Count of workloads that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a WorkloadOutcome;
    type IntoIter = std::slice::Iter<'a, WorkloadOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
