//! Workload Registry
//!
//! Catalog of benchmarkable units. Workloads are registered once at
//! startup through an explicit API, keyed by a unique name, and are
//! immutable afterwards. Iteration order is insertion order, which is
//! also the order measurements appear in the final `ResultSet`.

use crate::error::BenchError;
use fxhash::FxHashMap;

/// A named, zero-argument unit of benchmarkable work.
///
/// The trial closure wraps one algorithm variant call together with its
/// fixed input, captured at registration time. Its return value (if any)
/// is discarded; only its cost is measured.
pub struct Workload {
    name: String,
    trial: Box<dyn Fn()>,
}

impl Workload {
    /// The workload's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the trial function once.
    #[inline]
    pub fn run_trial(&self) {
        (self.trial)();
    }
}

impl std::fmt::Debug for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workload").field("name", &self.name).finish()
    }
}

/// Insertion-ordered catalog of workloads with unique names.
#[derive(Debug, Default)]
pub struct WorkloadRegistry {
    order: Vec<Workload>,
    index: FxHashMap<String, usize>,
}

impl WorkloadRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workload under `name`.
    ///
    /// Fails with [`BenchError::DuplicateName`] if the name is already
    /// taken; the earlier registration is retained and the registry is
    /// left unchanged.
    pub fn register<F>(&mut self, name: impl Into<String>, trial: F) -> Result<(), BenchError>
    where
        F: Fn() + 'static,
    {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(BenchError::DuplicateName { name });
        }
        self.index.insert(name.clone(), self.order.len());
        self.order.push(Workload {
            name,
            trial: Box::new(trial),
        });
        Ok(())
    }

    /// Iterate over registered workloads in insertion order.
    ///
    /// The iterator is finite and restartable: calling this again yields
    /// the same sequence.
    pub fn workloads(&self) -> impl Iterator<Item = &Workload> {
        self.order.iter()
    }

    /// Look up a workload by name.
    pub fn get(&self, name: &str) -> Option<&Workload> {
        self.index.get(name).map(|&i| &self.order[i])
    }

    /// Number of registered workloads.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry holds no workloads.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
