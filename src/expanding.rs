//! Expanding (cumulative) window statistics.
//!
//! There is no expanding algorithm of its own here: an expanding
//! window is a rolling window whose size equals the series length.
//! Because rolling windows are truncated at the series start, setting
//! `window_size = x.len()` makes position `i` aggregate `x[0..=i]`
//! exactly, and the seasonal variants get the same behavior per
//! residue class. Keeping a single reducer implementation for both
//! bounded and unbounded windows halves the surface to test.
//!
//! The warm-up threshold is fixed per statistic: standard deviation
//! needs two valid observations, mean/max/min need one. Positions
//! whose prefix holds fewer valid observations are `NaN`.

use crate::error::{Result, WindowError};
use crate::rolling::{rolling_aggregate_into, seasonal_rolling_aggregate_into, Aggregate};

/// The single adapter behind all eight entry points.
fn expanding_into(kind: Aggregate, x: &[f64], out: &mut [f64]) -> Result<()> {
    if out.len() != x.len() {
        return Err(WindowError::ShapeMismatch {
            expected: x.len(),
            got: out.len(),
        });
    }
    if x.is_empty() {
        return Ok(());
    }
    rolling_aggregate_into(kind, x, x.len(), Some(kind.default_min_samples()), out)
}

fn seasonal_expanding_into(
    kind: Aggregate,
    x: &[f64],
    season_length: usize,
    out: &mut [f64],
) -> Result<()> {
    if season_length == 0 {
        return Err(WindowError::InvalidParameter(
            "season_length must be at least 1".to_string(),
        ));
    }
    if out.len() != x.len() {
        return Err(WindowError::ShapeMismatch {
            expected: x.len(),
            got: out.len(),
        });
    }
    if x.is_empty() {
        return Ok(());
    }
    seasonal_rolling_aggregate_into(
        kind,
        x,
        season_length,
        x.len(),
        Some(kind.default_min_samples()),
        out,
    )
}

fn allocating<F>(n: usize, fill: F) -> Result<Vec<f64>>
where
    F: FnOnce(&mut [f64]) -> Result<()>,
{
    let mut out = vec![f64::NAN; n];
    fill(&mut out)?;
    Ok(out)
}

/// Compute the expanding mean: `out[i]` is the mean of `x[0..=i]`.
///
/// # Example
///
/// ```
/// use window_ops::expanding::expanding_mean;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(expanding_mean(&x).unwrap(), vec![1.0, 1.5, 2.0, 2.5, 3.0]);
/// ```
pub fn expanding_mean(x: &[f64]) -> Result<Vec<f64>> {
    allocating(x.len(), |out| expanding_into(Aggregate::Mean, x, out))
}

/// As [`expanding_mean`], writing into a caller-supplied buffer of the
/// same length as `x`. Every position is written; the buffer does not
/// need to be pre-initialized.
pub fn expanding_mean_into(x: &[f64], out: &mut [f64]) -> Result<()> {
    expanding_into(Aggregate::Mean, x, out)
}

/// Compute the expanding sample standard deviation (one degree of
/// freedom subtracted). `out[0]` is always `NaN`: sample variance is
/// undefined below two observations.
///
/// # Example
///
/// ```
/// use window_ops::expanding::expanding_std;
///
/// let result = expanding_std(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!(result[0].is_nan());
/// assert!((result[1] - 0.5_f64.sqrt()).abs() < 1e-12);
/// assert!((result[4] - 2.5_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn expanding_std(x: &[f64]) -> Result<Vec<f64>> {
    allocating(x.len(), |out| expanding_into(Aggregate::Std, x, out))
}

/// As [`expanding_std`], writing into a caller-supplied buffer.
pub fn expanding_std_into(x: &[f64], out: &mut [f64]) -> Result<()> {
    expanding_into(Aggregate::Std, x, out)
}

/// Compute the expanding maximum: `out[i]` is the largest valid value
/// in `x[0..=i]`. The result is non-decreasing over valid positions.
pub fn expanding_max(x: &[f64]) -> Result<Vec<f64>> {
    allocating(x.len(), |out| expanding_into(Aggregate::Max, x, out))
}

/// As [`expanding_max`], writing into a caller-supplied buffer.
pub fn expanding_max_into(x: &[f64], out: &mut [f64]) -> Result<()> {
    expanding_into(Aggregate::Max, x, out)
}

/// Compute the expanding minimum: `out[i]` is the smallest valid value
/// in `x[0..=i]`. The result is non-increasing over valid positions.
pub fn expanding_min(x: &[f64]) -> Result<Vec<f64>> {
    allocating(x.len(), |out| expanding_into(Aggregate::Min, x, out))
}

/// As [`expanding_min`], writing into a caller-supplied buffer.
pub fn expanding_min_into(x: &[f64], out: &mut [f64]) -> Result<()> {
    expanding_into(Aggregate::Min, x, out)
}

/// Compute the expanding mean independently per residue class
/// `i mod season_length`.
///
/// `season_length = 1` degenerates to [`expanding_mean`]. A
/// `season_length` larger than the input leaves each class with at
/// most one element, so every position echoes its own value.
///
/// # Example
///
/// ```
/// use window_ops::expanding::seasonal_expanding_mean;
///
/// // Even positions accumulate [1, 3, 5], odd positions [2, 4].
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let result = seasonal_expanding_mean(&x, 2).unwrap();
/// assert_eq!(result, vec![1.0, 2.0, 2.0, 3.0, 3.0]);
/// ```
pub fn seasonal_expanding_mean(x: &[f64], season_length: usize) -> Result<Vec<f64>> {
    allocating(x.len(), |out| {
        seasonal_expanding_into(Aggregate::Mean, x, season_length, out)
    })
}

/// As [`seasonal_expanding_mean`], writing into a caller-supplied buffer.
pub fn seasonal_expanding_mean_into(
    x: &[f64],
    season_length: usize,
    out: &mut [f64],
) -> Result<()> {
    seasonal_expanding_into(Aggregate::Mean, x, season_length, out)
}

/// Compute the expanding sample standard deviation per residue class.
/// A class yields `NaN` until it has seen two valid observations.
pub fn seasonal_expanding_std(x: &[f64], season_length: usize) -> Result<Vec<f64>> {
    allocating(x.len(), |out| {
        seasonal_expanding_into(Aggregate::Std, x, season_length, out)
    })
}

/// As [`seasonal_expanding_std`], writing into a caller-supplied buffer.
pub fn seasonal_expanding_std_into(
    x: &[f64],
    season_length: usize,
    out: &mut [f64],
) -> Result<()> {
    seasonal_expanding_into(Aggregate::Std, x, season_length, out)
}

/// Compute the expanding maximum per residue class.
pub fn seasonal_expanding_max(x: &[f64], season_length: usize) -> Result<Vec<f64>> {
    allocating(x.len(), |out| {
        seasonal_expanding_into(Aggregate::Max, x, season_length, out)
    })
}

/// As [`seasonal_expanding_max`], writing into a caller-supplied buffer.
pub fn seasonal_expanding_max_into(
    x: &[f64],
    season_length: usize,
    out: &mut [f64],
) -> Result<()> {
    seasonal_expanding_into(Aggregate::Max, x, season_length, out)
}

/// Compute the expanding minimum per residue class.
pub fn seasonal_expanding_min(x: &[f64], season_length: usize) -> Result<Vec<f64>> {
    allocating(x.len(), |out| {
        seasonal_expanding_into(Aggregate::Min, x, season_length, out)
    })
}

/// As [`seasonal_expanding_min`], writing into a caller-supplied buffer.
pub fn seasonal_expanding_min_into(
    x: &[f64],
    season_length: usize,
    out: &mut [f64],
) -> Result<()> {
    seasonal_expanding_into(Aggregate::Min, x, season_length, out)
}
