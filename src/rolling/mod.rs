//! Fixed-window rolling statistics.
//!
//! Every reducer in this module shares one contract: for position `i`
//! the candidate window is `x[max(0, i - window_size + 1) ..= i]`
//! (truncated at the series start), `NaN` elements inside the window
//! count as missing, and the output at `i` is the aggregate of the
//! window's valid elements when there are at least `min_samples` of
//! them, `NaN` otherwise. `min_samples` defaults to `window_size`.
//!
//! The seasonal variants apply the same contract to each residue class
//! `i mod season_length` independently, with `window_size` measured in
//! elements of the same class.

mod extrema;
mod seasonal;
mod stat;

use crate::error::{Result, WindowError};

/// The statistic computed over each window.
///
/// Used with [`rolling_aggregate`] and [`seasonal_rolling_aggregate`]
/// to select a reducer at runtime; the per-statistic functions in this
/// module are thin wrappers over the same dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Mean,
    Std,
    Max,
    Min,
}

impl Aggregate {
    /// Warm-up threshold used by the expanding adapters: sample
    /// standard deviation needs two observations, everything else one.
    pub fn default_min_samples(self) -> usize {
        match self {
            Aggregate::Std => 2,
            _ => 1,
        }
    }
}

/// Resolve the optional `min_samples` and validate window parameters.
pub(crate) fn resolve_min_samples(window_size: usize, min_samples: Option<usize>) -> Result<usize> {
    if window_size == 0 {
        return Err(WindowError::InvalidParameter(
            "window_size must be at least 1".to_string(),
        ));
    }
    let min_samples = min_samples.unwrap_or(window_size);
    if min_samples == 0 {
        return Err(WindowError::InvalidParameter(
            "min_samples must be at least 1".to_string(),
        ));
    }
    Ok(min_samples)
}

pub(crate) fn check_shape(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(WindowError::ShapeMismatch { expected, got });
    }
    Ok(())
}

/// Compute a rolling aggregate, dispatching on `kind`.
///
/// # Arguments
/// * `x` - Input series; `NaN` marks a missing observation
/// * `window_size` - Window length, must be at least 1
/// * `min_samples` - Valid observations required per window; defaults
///   to `window_size` when `None`
pub fn rolling_aggregate(
    kind: Aggregate,
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
) -> Result<Vec<f64>> {
    let mut out = vec![f64::NAN; x.len()];
    rolling_aggregate_into(kind, x, window_size, min_samples, &mut out)?;
    Ok(out)
}

/// As [`rolling_aggregate`], writing into a caller-supplied buffer.
///
/// `out` must have the same length as `x`; every position is written,
/// so the buffer does not need to be pre-initialized.
pub fn rolling_aggregate_into(
    kind: Aggregate,
    x: &[f64],
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
) -> Result<()> {
    match kind {
        Aggregate::Mean => stat::rolling_mean_into(x, window_size, min_samples, out),
        Aggregate::Std => stat::rolling_std_into(x, window_size, min_samples, out),
        Aggregate::Max => extrema::rolling_max_into(x, window_size, min_samples, out),
        Aggregate::Min => extrema::rolling_min_into(x, window_size, min_samples, out),
    }
}

/// Compute a seasonal rolling aggregate, dispatching on `kind`.
///
/// The window at position `i` only contains elements whose index shares
/// `i`'s residue class modulo `season_length`, and `window_size` counts
/// elements within that class.
pub fn seasonal_rolling_aggregate(
    kind: Aggregate,
    x: &[f64],
    season_length: usize,
    window_size: usize,
    min_samples: Option<usize>,
) -> Result<Vec<f64>> {
    let mut out = vec![f64::NAN; x.len()];
    seasonal_rolling_aggregate_into(kind, x, season_length, window_size, min_samples, &mut out)?;
    Ok(out)
}

/// As [`seasonal_rolling_aggregate`], writing into a caller-supplied buffer.
pub fn seasonal_rolling_aggregate_into(
    kind: Aggregate,
    x: &[f64],
    season_length: usize,
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
) -> Result<()> {
    seasonal::seasonal_rolling_into(kind, x, season_length, window_size, min_samples, out)
}

macro_rules! rolling_fns {
    ($(#[$doc:meta])* $name:ident, $name_into:ident, $seasonal:ident, $seasonal_into:ident, $kind:expr) => {
        $(#[$doc])*
        pub fn $name(x: &[f64], window_size: usize, min_samples: Option<usize>) -> Result<Vec<f64>> {
            rolling_aggregate($kind, x, window_size, min_samples)
        }

        #[doc = concat!("As [`", stringify!($name), "`], writing into a caller-supplied buffer.")]
        pub fn $name_into(
            x: &[f64],
            window_size: usize,
            min_samples: Option<usize>,
            out: &mut [f64],
        ) -> Result<()> {
            rolling_aggregate_into($kind, x, window_size, min_samples, out)
        }

        #[doc = concat!("Seasonal variant of [`", stringify!($name), "`]: the window at ")]
        #[doc = "position `i` is restricted to elements of the same residue class"]
        #[doc = "`i mod season_length`, with `window_size` counted within the class."]
        pub fn $seasonal(
            x: &[f64],
            season_length: usize,
            window_size: usize,
            min_samples: Option<usize>,
        ) -> Result<Vec<f64>> {
            seasonal_rolling_aggregate($kind, x, season_length, window_size, min_samples)
        }

        #[doc = concat!("As [`", stringify!($seasonal), "`], writing into a caller-supplied buffer.")]
        pub fn $seasonal_into(
            x: &[f64],
            season_length: usize,
            window_size: usize,
            min_samples: Option<usize>,
            out: &mut [f64],
        ) -> Result<()> {
            seasonal_rolling_aggregate_into($kind, x, season_length, window_size, min_samples, out)
        }
    };
}

rolling_fns!(
    /// Compute the rolling mean (moving average).
    ///
    /// # Example
    ///
    /// ```
    /// use window_ops::rolling::rolling_mean;
    ///
    /// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    /// let result = rolling_mean(&x, 3, None).unwrap();
    /// assert!(result[1].is_nan());
    /// assert_eq!(result[2], 2.0); // (1 + 2 + 3) / 3
    /// ```
    rolling_mean, rolling_mean_into, seasonal_rolling_mean, seasonal_rolling_mean_into,
    Aggregate::Mean
);

rolling_fns!(
    /// Compute the rolling sample standard deviation (one degree of
    /// freedom subtracted).
    rolling_std, rolling_std_into, seasonal_rolling_std, seasonal_rolling_std_into,
    Aggregate::Std
);

rolling_fns!(
    /// Compute the rolling maximum.
    rolling_max, rolling_max_into, seasonal_rolling_max, seasonal_rolling_max_into,
    Aggregate::Max
);

rolling_fns!(
    /// Compute the rolling minimum.
    rolling_min, rolling_min_into, seasonal_rolling_min, seasonal_rolling_min_into,
    Aggregate::Min
);
