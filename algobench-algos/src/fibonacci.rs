//! Fibonacci: rolling accumulators vs. naive double recursion.
//!
//! The recursive variant is the textbook exponential-time definition;
//! the point of benchmarking it is precisely that cost. Both variants
//! return `n` for `n <= 1` and agree everywhere else.

/// Compute the nth Fibonacci number with two rolling accumulators.
pub fn iterative(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    let mut prev = 0u64;
    let mut curr = 1u64;
    for _ in 2..=n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    curr
}

/// Compute the nth Fibonacci number with naive double recursion.
///
/// Exponential time: O(phi^n) calls. Keep `n` small.
pub fn recursive(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    recursive(n - 1) + recursive(n - 2)
}
