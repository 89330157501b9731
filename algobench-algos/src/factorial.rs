//! Factorial: iterative loop vs. plain recursion.
//!
//! Both variants agree for every `n` where `n!` fits in `u64`
//! (`n <= 20`). Recursion depth equals `n`.

/// Compute `n!` by multiplying `1..=n` in a loop.
pub fn iterative(n: u32) -> u64 {
    let mut result = 1u64;
    for i in 1..=n as u64 {
        result *= i;
    }
    result
}

/// Compute `n!` as `n * (n-1)!` with base case `n <= 1`.
pub fn recursive(n: u32) -> u64 {
    if n <= 1 {
        return 1;
    }
    n as u64 * recursive(n - 1)
}
