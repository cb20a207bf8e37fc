use ndarray::{
    Array1,
    ArrayViewD
};

use crate::gradient::gradienterror::GradientError;
use crate::gradient::inputvalidator::{
    validate_initial_values,
    validate_shape,
    validate_spacing
};
use crate::gradient::intgrad::reconstruct;
use crate::gradient::spacing::Spacing;

/// [`reconstruct`] for callers holding `ndarray` arrays of arbitrary dimension.
///
/// `derivative` must be one-dimensional. `spacing` holds either one value
/// (constant step) or one coordinate per sample, read in logical order
/// whatever its shape. `initial` must hold exactly one value.
pub fn reconstruct_array(
    derivative: ArrayViewD<'_, f64>,
    spacing: ArrayViewD<'_, f64>,
    initial: ArrayViewD<'_, f64>,
) -> Result<Array1<f64>, GradientError> {
    let n = validate_shape(derivative.shape())?;

    let spacing = spacing_from_array(spacing);
    validate_spacing(&spacing, n)?;

    let initial: Vec<f64> = initial.iter().copied().collect();
    let initial = validate_initial_values(&initial)?;

    let samples: Vec<f64> = derivative.iter().copied().collect();
    reconstruct(&samples, &spacing, initial).map(Array1::from_vec)
}

fn spacing_from_array(spacing: ArrayViewD<'_, f64>) -> Spacing {
    let values: Vec<f64> = spacing.iter().copied().collect();
    match values.as_slice() {
        [dx] => Spacing::Constant(*dx),
        _ => Spacing::Coordinates(values),
    }
}
