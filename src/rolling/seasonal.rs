//! Seasonal rolling reduction by gather/scatter over residue classes.
//!
//! Index `i` belongs to class `i mod season_length`. Each class is an
//! ordered subsequence of the input; the plain rolling reducer runs on
//! it unchanged and the results scatter back to the original positions.
//! Classes are ragged when the length is not a multiple of
//! `season_length`; a shorter class is just a shorter subsequence.

use super::{check_shape, resolve_min_samples, rolling_aggregate_into, Aggregate};
use crate::error::{Result, WindowError};

pub(super) fn seasonal_rolling_into(
    kind: Aggregate,
    x: &[f64],
    season_length: usize,
    window_size: usize,
    min_samples: Option<usize>,
    out: &mut [f64],
) -> Result<()> {
    if season_length == 0 {
        return Err(WindowError::InvalidParameter(
            "season_length must be at least 1".to_string(),
        ));
    }
    resolve_min_samples(window_size, min_samples)?;
    check_shape(x.len(), out.len())?;

    let n = x.len();
    let mut sub = Vec::with_capacity(n / season_length + 1);
    let mut sub_out = Vec::with_capacity(n / season_length + 1);

    // Classes past n are empty, so the work stays O(n) for any
    // season_length.
    for class in 0..season_length.min(n) {
        sub.clear();
        sub.extend(x.iter().copied().skip(class).step_by(season_length));
        sub_out.clear();
        sub_out.resize(sub.len(), f64::NAN);

        rolling_aggregate_into(kind, &sub, window_size, min_samples, &mut sub_out)?;

        for (k, &value) in sub_out.iter().enumerate() {
            out[class + k * season_length] = value;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolling::{rolling_mean, seasonal_rolling_max, seasonal_rolling_mean};
    use approx::assert_relative_eq;

    // ==================== partitioning ====================

    #[test]
    fn classes_accumulate_independently() {
        // Even positions: [1, 3, 5]; odd positions: [2, 4].
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = seasonal_rolling_mean(&x, 2, 2, None).unwrap();

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], 2.0, epsilon = 1e-10); // mean(1, 3)
        assert_relative_eq!(result[3], 3.0, epsilon = 1e-10); // mean(2, 4)
        assert_relative_eq!(result[4], 4.0, epsilon = 1e-10); // mean(3, 5)
    }

    #[test]
    fn season_length_one_matches_plain_rolling() {
        let x = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let seasonal = seasonal_rolling_mean(&x, 1, 3, None).unwrap();
        let plain = rolling_mean(&x, 3, None).unwrap();

        for (a, b) in seasonal.iter().zip(&plain) {
            assert!(a == b || (a.is_nan() && b.is_nan()));
        }
    }

    #[test]
    fn ragged_classes_are_just_shorter() {
        // Length 7, season 3: classes [x0, x3, x6], [x1, x4], [x2, x5].
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = seasonal_rolling_max(&x, 3, 2, Some(1)).unwrap();

        assert_relative_eq!(result[5], 6.0, epsilon = 1e-10); // max(3, 6)
        assert_relative_eq!(result[6], 7.0, epsilon = 1e-10); // max(4, 7)
    }

    #[test]
    fn season_length_beyond_input_gives_single_element_classes() {
        let x = vec![4.0, 2.0, 8.0];
        let result = seasonal_rolling_mean(&x, 10, 5, Some(1)).unwrap();

        for (i, &v) in x.iter().enumerate() {
            assert_relative_eq!(result[i], v, epsilon = 1e-10);
        }
    }

    // ==================== validation ====================

    #[test]
    fn zero_season_length_is_rejected() {
        let x = vec![1.0, 2.0];
        let err = seasonal_rolling_mean(&x, 0, 2, None).unwrap_err();
        assert!(matches!(err, WindowError::InvalidParameter(_)));
    }

    #[test]
    fn validation_is_eager_even_for_empty_input() {
        let err = seasonal_rolling_mean(&[], 0, 2, None).unwrap_err();
        assert!(matches!(err, WindowError::InvalidParameter(_)));
    }
}
