use crate::gradient::gradienterror::GradientError;
use crate::gradient::spacing::Spacing;

/// Checks the shape of the derivative samples and returns their count.
pub fn validate_shape(shape: &[usize]) -> Result<usize, GradientError> {
    match shape {
        [n] if *n >= 2 => Ok(*n),
        _ => Err(GradientError::ShapeError { shape: shape.to_vec() }),
    }
}

/// Checks that `spacing` is a single step or one strictly increasing
/// coordinate per sample.
pub fn validate_spacing(spacing: &Spacing, n: usize) -> Result<(), GradientError> {
    if spacing.as_constant().is_some() {
        return Ok(());
    }
    match spacing {
        Spacing::Coordinates(coordinates) if coordinates.len() == n => {
            // NaN 不滿足 <= 0，交由 spline 擬合回報
            coordinates
                .windows(2)
                .enumerate()
                .find(|(_, pair)| pair[1] - pair[0] <= 0.0)
                .map_or(Ok(()), |(index, pair)| {
                    Err(GradientError::MonotonicityError { index, lhs: pair[0], rhs: pair[1] })
                })
        }
        _ => Err(GradientError::SpacingError { expected: n, actual: spacing.size() }),
    }
}

pub fn validate_initial(initial: f64) -> Result<f64, GradientError> {
    if initial.is_finite() {
        Ok(initial)
    } else {
        Err(GradientError::ValueError(format!("got {initial}")))
    }
}

/// Like [`validate_initial`], for an initial value that arrives as an array.
pub fn validate_initial_values(values: &[f64]) -> Result<f64, GradientError> {
    match values {
        [initial] => validate_initial(*initial),
        _ => Err(GradientError::ValueError(format!("got {} values", values.len()))),
    }
}

/// Runs every check in the order the pipeline does.
pub fn validate(derivative: &[f64], spacing: &Spacing, initial: f64) -> Result<(), GradientError> {
    let n = validate_shape(&[derivative.len()])?;
    validate_spacing(spacing, n)?;
    validate_initial(initial)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_must_be_a_vector_of_at_least_two() {
        assert_eq!(validate_shape(&[5]).unwrap(), 5);
        assert!(matches!(validate_shape(&[1]), Err(GradientError::ShapeError { .. })));
        assert!(matches!(validate_shape(&[0]), Err(GradientError::ShapeError { .. })));
        assert!(matches!(validate_shape(&[4, 1]), Err(GradientError::ShapeError { .. })));
        assert!(matches!(validate_shape(&[]), Err(GradientError::ShapeError { .. })));
    }

    #[test]
    fn spacing_size_must_be_one_or_n() {
        assert!(validate_spacing(&Spacing::Constant(0.1), 4).is_ok());
        assert!(validate_spacing(&Spacing::Coordinates(vec![3.0]), 4).is_ok());
        assert!(validate_spacing(&Spacing::Coordinates(vec![0.0, 1.0, 2.0, 4.0]), 4).is_ok());

        match validate_spacing(&Spacing::Coordinates(vec![0.0, 1.0, 2.0]), 4) {
            Err(GradientError::SpacingError { expected, actual }) => {
                assert_eq!((expected, actual), (4, 3));
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(matches!(
            validate_spacing(&Spacing::Coordinates(Vec::new()), 4),
            Err(GradientError::SpacingError { actual: 0, .. })
        ));
    }

    #[test]
    fn coordinates_must_be_strictly_increasing() {
        match validate_spacing(&Spacing::Coordinates(vec![0.0, 1.0, 1.0, 3.0]), 4) {
            Err(GradientError::MonotonicityError { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(matches!(
            validate_spacing(&Spacing::Coordinates(vec![0.0, 2.0, 1.0]), 3),
            Err(GradientError::MonotonicityError { index: 1, .. })
        ));
    }

    #[test]
    fn initial_must_be_a_finite_scalar() {
        assert_eq!(validate_initial(-2.5).unwrap(), -2.5);
        assert!(matches!(validate_initial(f64::NAN), Err(GradientError::ValueError(_))));
        assert!(matches!(validate_initial(f64::NEG_INFINITY), Err(GradientError::ValueError(_))));
        assert_eq!(validate_initial_values(&[4.0]).unwrap(), 4.0);
        assert!(matches!(validate_initial_values(&[1.0, 2.0]), Err(GradientError::ValueError(_))));
        assert!(matches!(validate_initial_values(&[]), Err(GradientError::ValueError(_))));
    }

    #[test]
    fn shape_is_checked_before_spacing_and_spacing_before_initial() {
        assert!(matches!(
            validate(&[1.0], &Spacing::Coordinates(vec![0.0, 0.0]), f64::NAN),
            Err(GradientError::ShapeError { .. })
        ));
        assert!(matches!(
            validate(&[1.0, 2.0], &Spacing::Coordinates(vec![1.0, 0.0]), f64::NAN),
            Err(GradientError::MonotonicityError { .. })
        ));
        assert!(matches!(
            validate(&[1.0, 2.0], &Spacing::Constant(1.0), f64::INFINITY),
            Err(GradientError::ValueError(_))
        ));
    }
}
