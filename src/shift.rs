//! Index-shift (lag) utility.

/// Shift a series forward by `offset` positions.
///
/// Returns a freshly allocated series of the same length where
/// `out[i + offset] = x[i]` for every `i` in `[0, n - offset)`;
/// positions with no source are `NaN`.
///
/// Boundary behavior, kept bug-compatible with the reference
/// implementation:
/// * `offset = 0` copies the input,
/// * `offset >= n` yields all `NaN`,
/// * `offset < 0` also yields all `NaN` - this is NOT a backward
///   shift, the copy range is simply empty under the rule above.
///
/// # Example
///
/// ```
/// use window_ops::shift::shift_array;
///
/// let shifted = shift_array(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
/// assert!(shifted[0].is_nan() && shifted[1].is_nan());
/// assert_eq!(&shifted[2..], &[1.0, 2.0, 3.0]);
/// ```
pub fn shift_array(x: &[f64], offset: isize) -> Vec<f64> {
    let n = x.len();
    let mut out = vec![f64::NAN; n];
    if offset < 0 {
        return out;
    }
    let offset = offset as usize;
    if offset >= n {
        return out;
    }
    for i in 0..n - offset {
        out[i + offset] = x[i];
    }
    out
}
