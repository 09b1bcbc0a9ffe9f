//! Rolling mean and standard deviation via Welford's online algorithm.
//!
//! A single accumulator supports both adding the element entering the
//! window and removing the element leaving it, so the whole series is
//! processed in one pass with O(1) work per element. Welford's update
//! is numerically stable where a naive sum-of-squares would suffer
//! catastrophic cancellation.

use super::{check_shape, resolve_min_samples};
use crate::error::Result;

/// Welford accumulator over the valid (non-NaN) elements of a window.
#[derive(Debug, Clone, Copy, Default)]
struct Welford {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn add(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Reverse update for the element sliding out of the window.
    fn remove(&mut self, x: f64) {
        self.count -= 1;
        if self.count == 0 {
            self.mean = 0.0;
            self.m2 = 0.0;
        } else {
            let delta = x - self.mean;
            self.mean -= delta / self.count as f64;
            self.m2 -= delta * (x - self.mean);
        }
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation with one degree of freedom subtracted.
    /// Reverse updates can leave `m2` a hair below zero for constant
    /// windows, hence the clamp.
    fn sample_std(&self) -> f64 {
        if self.count < 2 {
            return f64::NAN;
        }
        (self.m2.max(0.0) / (self.count - 1) as f64).sqrt()
    }
}

fn rolling_stat_into<F>(
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
    finish: F,
) -> Result<()>
where
    F: Fn(&Welford) -> f64,
{
    let min_samples = resolve_min_samples(window_size, min_samples)?;
    check_shape(x.len(), out.len())?;

    let mut acc = Welford::default();
    for i in 0..x.len() {
        if !x[i].is_nan() {
            acc.add(x[i]);
        }
        if i >= window_size {
            let leaving = x[i - window_size];
            if !leaving.is_nan() {
                acc.remove(leaving);
            }
        }
        out[i] = if acc.count >= min_samples {
            finish(&acc)
        } else {
            f64::NAN
        };
    }
    Ok(())
}

pub(super) fn rolling_mean_into(
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
) -> Result<()> {
    rolling_stat_into(x, window_size, min_samples, out, Welford::mean)
}

pub(super) fn rolling_std_into(
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
) -> Result<()> {
    rolling_stat_into(x, window_size, min_samples, out, Welford::sample_std)
}
