//! Order-statistic selection over sample windows
//!
//! A sample window is a mutable byte slice holding the pixel intensities of
//! one local neighborhood. Selection sorts the window in place with an
//! allocation-free quicksort and reads the requested rank from the sorted
//! slice. The caller owns the window and nothing is retained after return.
//!
//! The pivot is always the leftmost element and no randomization is done;
//! worst-case O(N^2) on adversarial input is accepted because windows are
//! small and fixed-size.

use crate::error::{FilterError, FilterResult};

/// Sort a window in place into non-decreasing order.
///
/// Empty and single-element windows are returned untouched.
pub fn sort_window(window: &mut [u8]) {
    if window.len() < 2 {
        return;
    }
    let pivot_at = partition(window);
    let (left, right) = window.split_at_mut(pivot_at);
    sort_window(left);
    sort_window(&mut right[1..]);
}

/// Partition around the leftmost element.
///
/// Two scan pointers converge from both ends, swapping out-of-order pairs;
/// the pivot is then swapped into its final position, which is returned.
/// On exit everything left of the returned index is <= the pivot and
/// everything right of it is > the pivot.
fn partition(window: &mut [u8]) -> usize {
    let pivot = window[0];
    let mut i = 0;
    let mut j = window.len() - 1;

    while i < j {
        while i < window.len() && window[i] <= pivot {
            i += 1;
        }
        // window[0] == pivot stops this scan, so j never underflows
        while window[j] > pivot {
            j -= 1;
        }
        if i < j {
            window.swap(i, j);
        }
    }

    window.swap(0, j);
    j
}

/// Sort the window and return the value at a 0-based rank.
///
/// # Errors
///
/// Returns [`FilterError::EmptyWindow`] for a zero-length window and
/// [`FilterError::RankOutOfBounds`] when `rank >= window.len()`.
pub fn rank_value(window: &mut [u8], rank: usize) -> FilterResult<u8> {
    if window.is_empty() {
        return Err(FilterError::EmptyWindow);
    }
    if rank >= window.len() {
        return Err(FilterError::RankOutOfBounds {
            rank,
            len: window.len(),
        });
    }
    sort_window(window);
    Ok(window[rank])
}

/// Lower quartile of the window: rank `(N-1)/4`.
///
/// # Errors
///
/// Returns [`FilterError::EmptyWindow`] for a zero-length window.
pub fn lower_quartile(window: &mut [u8]) -> FilterResult<u8> {
    let n = window.len();
    if n == 0 {
        return Err(FilterError::EmptyWindow);
    }
    rank_value(window, (n - 1) / 4)
}

/// Median of the window: rank `(N-1)/2`.
///
/// # Errors
///
/// Returns [`FilterError::EmptyWindow`] for a zero-length window.
pub fn median(window: &mut [u8]) -> FilterResult<u8> {
    let n = window.len();
    if n == 0 {
        return Err(FilterError::EmptyWindow);
    }
    rank_value(window, (n - 1) / 2)
}

/// Upper quartile of the window: rank `3*(N-1)/4`.
///
/// # Errors
///
/// Returns [`FilterError::EmptyWindow`] for a zero-length window.
pub fn upper_quartile(window: &mut [u8]) -> FilterResult<u8> {
    let n = window.len();
    if n == 0 {
        return Err(FilterError::EmptyWindow);
    }
    rank_value(window, 3 * (n - 1) / 4)
}
