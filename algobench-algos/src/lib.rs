#![warn(missing_docs)]
//! AlgoBench Workloads
//!
//! Iterative and recursive variants of four classic algorithms, plus
//! the standard workload catalog that wires them into a
//! `WorkloadRegistry`. Each variant is a pure function over its input;
//! nothing here performs I/O, so trial cost profiles stay comparable.
//!
//! The recursive variants are not tail-call-safe: recursion depth
//! scales with the input (factorial/Fibonacci depth = n, quicksort
//! depth = partition depth). The fixed catalog inputs are small enough
//! that this never matters; for large inputs prefer the iterative
//! variants.

pub mod catalog;
pub mod factorial;
pub mod fibonacci;
pub mod hanoi;
pub mod input;
pub mod quicksort;

pub use catalog::standard_registry;
