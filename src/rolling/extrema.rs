//! Rolling maximum and minimum via a monotonic deque.
//!
//! The deque holds indices whose values are monotonically ordered
//! (decreasing for max, increasing for min); the current extremum is
//! always at the front. Each index is pushed and popped at most once,
//! giving O(1) amortized work per element regardless of window size.
//! NaN elements are never enqueued, so a window of only missing values
//! leaves the deque empty.

use std::collections::VecDeque;

use super::{check_shape, resolve_min_samples};
use crate::error::Result;

/// `dominated(tail, new)` decides whether the value at the deque tail
/// can never be the extremum once `new` has entered the window.
fn rolling_extremum_into(
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
    dominated: fn(f64, f64) -> bool,
) -> Result<()> {
    let min_samples = resolve_min_samples(window_size, min_samples)?;
    check_shape(x.len(), out.len())?;

    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut valid = 0usize;

    for i in 0..x.len() {
        if !x[i].is_nan() {
            valid += 1;
            while let Some(&tail) = deque.back() {
                if dominated(x[tail], x[i]) {
                    deque.pop_back();
                } else {
                    break;
                }
            }
            deque.push_back(i);
        }
        if i >= window_size {
            let leaving = i - window_size;
            if !x[leaving].is_nan() {
                valid -= 1;
            }
            if deque.front() == Some(&leaving) {
                deque.pop_front();
            }
        }
        out[i] = match deque.front() {
            Some(&front) if valid >= min_samples => x[front],
            _ => f64::NAN,
        };
    }
    Ok(())
}

pub(super) fn rolling_max_into(
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
) -> Result<()> {
    rolling_extremum_into(x, window_size, min_samples, out, |tail, new| tail <= new)
}

pub(super) fn rolling_min_into(
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
) -> Result<()> {
    rolling_extremum_into(x, window_size, min_samples, out, |tail, new| tail >= new)
}
