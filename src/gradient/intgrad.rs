use tracing::{
    debug,
    trace
};

use crate::gradient::cumulativeassembler::assemble;
use crate::gradient::gradienterror::GradientError;
use crate::gradient::inputvalidator::{
    validate_initial,
    validate_shape
};
use crate::gradient::knotspacing::KnotSpacing;
use crate::gradient::segmentintegrator::segment_integrals;
use crate::gradient::spacing::Spacing;
use crate::math::curve::curveerror::CurveError;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::PiecewisePolynomial;

/// Reconstructs a function from samples of its derivative.
///
/// A not-a-knot cubic spline is fitted through `(x[i], derivative[i])`, every
/// spline segment is integrated in closed form, and the running sum of those
/// integrals is offset by `initial`. The result has the same length as
/// `derivative` and starts with `initial`.
///
/// # Arguments
/// * `derivative` - Derivative samples, at least two.
/// * `spacing` - A constant step (`Spacing::Constant`, usually `1.0`) or one
///   strictly increasing coordinate per sample.
/// * `initial` - Value of the function at the first sample.
///
/// # Errors
/// Input is validated before anything is fitted, in this order:
/// [`GradientError::ShapeError`], then [`GradientError::SpacingError`] or
/// [`GradientError::MonotonicityError`], then [`GradientError::ValueError`].
/// Problems found by the spline fit itself (a non-positive step, NaN
/// coordinates or samples) come back as [`GradientError::SplineError`].
///
/// # Examples
///
/// ```
/// use intgrad::gradient::intgrad::reconstruct;
/// use intgrad::gradient::spacing::Spacing;
///
/// let f = reconstruct(&[1.0, 1.0, 1.0, 1.0, 1.0], &Spacing::Constant(1.0), 0.0).unwrap();
/// assert_eq!(f, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn reconstruct(
    derivative: &[f64],
    spacing: &Spacing,
    initial: f64,
) -> Result<Vec<f64>, GradientError> {
    let n = validate_shape(&[derivative.len()])?;
    let knots = KnotSpacing::resolve(spacing, n)?;
    let initial = validate_initial(initial)?;
    debug!(samples = n, uniform = knots.is_uniform(), "resolved knot spacing");

    let spline = fit_spline(&knots, derivative)?;
    trace!(segments = spline.segment_count(), "fitted not-a-knot spline");

    let integrals = segment_integrals(knots.widths(), &spline);
    Ok(assemble(initial, &integrals))
}

/// Fits the spline through the resolved coordinates and derivative samples.
pub fn fit_spline(
    knots: &KnotSpacing,
    derivative: &[f64],
) -> Result<PiecewisePolynomial, CurveError> {
    PiecewisePolynomial::not_a_knot(Point2D::zip(knots.coordinates(), derivative))
}
