use thiserror::Error;

/// Errors raised while fitting a piecewise polynomial through a set of points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("at least {required} points are required, got {actual}")]
    InsufficientPointsError { required: usize, actual: usize },

    #[error("x[{index}] must be finite, got {value}")]
    NonFiniteCoordinateError { index: usize, value: f64 },

    #[error("y[{index}] must be finite, got {value}")]
    NonFiniteValueError { index: usize, value: f64 },

    #[error("x must be strictly increasing: x[{index}] = {lhs} is followed by {rhs}")]
    NotStrictlyIncreasingError { index: usize, lhs: f64, rhs: f64 },

    #[error("linear system for the spline coefficients is singular")]
    SingularSystemError,
}
