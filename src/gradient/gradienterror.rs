use thiserror::Error;

use crate::math::curve::curveerror::CurveError;

/// Errors returned when reconstructing a function from derivative samples.
///
/// Every variant is a validation failure reported before any partial result
/// exists; nothing is retried.
#[derive(Debug, Error)]
pub enum GradientError {
    /// Derivative samples are not one-dimensional or hold fewer than 2 values.
    #[error("dfdx must be a vector of length >= 2, got shape {shape:?}")]
    ShapeError { shape: Vec<usize> },

    #[error("dx must be a scalar or have length {expected}, got {actual} values")]
    SpacingError { expected: usize, actual: usize },

    #[error("x points must be strictly increasing: x[{index}] = {lhs} is followed by {rhs}")]
    MonotonicityError { index: usize, lhs: f64, rhs: f64 },

    #[error("f1 must be a finite scalar: {0}")]
    ValueError(String),

    /// Raised by the spline fit itself and passed through unchanged.
    #[error(transparent)]
    SplineError(#[from] CurveError),

    #[error("failed to read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
