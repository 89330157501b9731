//! Trial input generation.
//!
//! Inputs are generated once per workload registration, never per
//! repetition, so every repetition of a workload operates on the same
//! size and distribution. A seeded generator keeps runs reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Default seed for the input generator, overridable via `--seed`.
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Produce `len` integers drawn uniformly from `range`.
pub fn random_array(len: usize, range: RangeInclusive<i64>, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}
