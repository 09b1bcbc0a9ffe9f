//! # window-ops
//!
//! Rolling, expanding and seasonally expanding window statistics for
//! time series, plus an index-shift (lag) utility.
//!
//! All operations work on `&[f64]` slices where `NaN` marks a missing
//! observation. Missing values are never an error: they reduce the
//! number of valid samples inside a window, and any position whose
//! window holds fewer than `min_samples` valid observations yields
//! `NaN` in the output.
//!
//! The expanding functions are not a separate algorithm: an expanding
//! window is a rolling window whose size equals the series length, so
//! the start-truncation rule of the rolling reducers produces the
//! cumulative aggregate directly. The seasonal variants apply the same
//! trick independently to each residue class `i mod season_length`.
//!
//! # Example
//!
//! ```
//! use window_ops::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let means = expanding_mean(&x).unwrap();
//! assert_eq!(means, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
//!
//! // Even/odd positions accumulate separately.
//! let seasonal = seasonal_expanding_mean(&x, 2).unwrap();
//! assert_eq!(seasonal, vec![1.0, 2.0, 2.0, 3.0, 3.0]);
//!
//! let lagged = shift_array(&x, 2);
//! assert!(lagged[0].is_nan() && lagged[1].is_nan());
//! assert_eq!(&lagged[2..], &[1.0, 2.0, 3.0]);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod expanding;
pub mod rolling;
pub mod shift;

pub use error::{Result, WindowError};

pub mod prelude {
    pub use crate::error::{Result, WindowError};
    pub use crate::expanding::{
        expanding_max, expanding_mean, expanding_min, expanding_std, seasonal_expanding_max,
        seasonal_expanding_mean, seasonal_expanding_min, seasonal_expanding_std,
    };
    pub use crate::rolling::{
        rolling_max, rolling_mean, rolling_min, rolling_std, seasonal_rolling_max,
        seasonal_rolling_mean, seasonal_rolling_min, seasonal_rolling_std, Aggregate,
    };
    pub use crate::shift::shift_array;
}
