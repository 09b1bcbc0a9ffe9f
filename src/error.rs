//! Error types for the window-ops library.

use thiserror::Error;

/// Result type alias for window operations.
pub type Result<T> = std::result::Result<T, WindowError>;

/// Errors that can occur during window operations.
///
/// Note that a window holding fewer than `min_samples` valid
/// observations is not an error; the corresponding output position is
/// simply `NaN`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Supplied output buffer length differs from the input length.
    #[error("shape mismatch: expected output of length {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = WindowError::InvalidParameter("season_length must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid parameter: season_length must be at least 1"
        );

        let err = WindowError::ShapeMismatch {
            expected: 5,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected output of length 5, got 3"
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = WindowError::InvalidParameter("window_size must be at least 1".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
