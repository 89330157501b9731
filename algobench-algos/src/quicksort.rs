//! Quicksort with the Lomuto partition scheme, pivoting on the last
//! element of the current range.
//!
//! The recursive variant uses the call stack; the iterative variant
//! keeps an explicit stack of `(left, right)` sub-range pairs. Push
//! order only affects traversal order, not the final ascending result.

/// Sort `data` ascending using recursive quicksort.
pub fn sort_recursive(data: &mut [i64]) {
    if data.len() > 1 {
        recurse(data, 0, data.len() - 1);
    }
}

fn recurse(data: &mut [i64], left: usize, right: usize) {
    if left < right {
        let pivot = partition(data, left, right);
        if pivot > 0 {
            recurse(data, left, pivot - 1);
        }
        recurse(data, pivot + 1, right);
    }
}

/// Sort `data` ascending using quicksort with an explicit range stack
/// in lieu of the call stack.
pub fn sort_iterative(data: &mut [i64]) {
    if data.len() < 2 {
        return;
    }

    let mut stack = vec![(0usize, data.len() - 1)];
    while let Some((left, right)) = stack.pop() {
        if left >= right {
            continue;
        }
        let pivot = partition(data, left, right);
        if pivot > 0 {
            stack.push((left, pivot - 1));
        }
        stack.push((pivot + 1, right));
    }
}

/// Lomuto partition over `data[left..=right]` around `data[right]`.
///
/// Elements smaller than the pivot are moved left past a running
/// boundary index; the pivot is then swapped into its final position,
/// which is returned.
fn partition(data: &mut [i64], left: usize, right: usize) -> usize {
    let pivot = data[right];
    let mut boundary = left;
    for j in left..right {
        if data[j] < pivot {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, right);
    boundary
}
