//! The standard workload catalog.
//!
//! Registers the iterative/recursive pairs with their fixed inputs, in
//! a fixed order. Registration order is also measurement order in the
//! final result set.
//!
//! The quicksort workloads clone the base array on every trial so each
//! repetition sorts a comparably unsorted array. The clone sits inside
//! the timed region but costs the same for both variants, keeping the
//! iterative/recursive comparison fair.

use crate::{factorial, fibonacci, hanoi, input, quicksort};
use algobench_core::{BenchError, WorkloadRegistry};
use std::hint::black_box;
use std::ops::RangeInclusive;

/// Factorial input; `10!` fits comfortably in `u64`.
pub const FACTORIAL_N: u32 = 10;
/// Fibonacci input, shared by both variants so the pair measures the
/// same logical problem. Naive recursion at 25 is ~240k calls.
pub const FIBONACCI_N: u32 = 25;
/// Quicksort input size.
pub const ARRAY_LEN: usize = 50;
/// Quicksort input value range.
pub const ARRAY_RANGE: RangeInclusive<i64> = 1..=1000;
/// Hanoi disk count; 31 moves per trial.
pub const HANOI_DISKS: u32 = 5;

/// Build the registry holding the eight standard workloads.
pub fn standard_registry(seed: u64) -> Result<WorkloadRegistry, BenchError> {
    let mut registry = WorkloadRegistry::new();

    registry.register("factorial_iterative", || {
        black_box(factorial::iterative(black_box(FACTORIAL_N)));
    })?;
    registry.register("factorial_recursive", || {
        black_box(factorial::recursive(black_box(FACTORIAL_N)));
    })?;

    registry.register("fibonacci_iterative", || {
        black_box(fibonacci::iterative(black_box(FIBONACCI_N)));
    })?;
    registry.register("fibonacci_recursive", || {
        black_box(fibonacci::recursive(black_box(FIBONACCI_N)));
    })?;

    let base = input::random_array(ARRAY_LEN, ARRAY_RANGE, seed);
    let data = base.clone();
    registry.register("quicksort_iterative", move || {
        let mut scratch = data.clone();
        quicksort::sort_iterative(&mut scratch);
        black_box(scratch);
    })?;
    let data = base;
    registry.register("quicksort_recursive", move || {
        let mut scratch = data.clone();
        quicksort::sort_recursive(&mut scratch);
        black_box(scratch);
    })?;

    registry.register("hanoi_iterative", || {
        black_box(hanoi::solve_iterative(black_box(HANOI_DISKS)));
    })?;
    registry.register("hanoi_recursive", || {
        black_box(hanoi::solve_recursive(black_box(HANOI_DISKS)));
    })?;

    Ok(registry)
}
