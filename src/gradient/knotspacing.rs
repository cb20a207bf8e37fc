use crate::gradient::gradienterror::GradientError;
use crate::gradient::inputvalidator::validate_spacing;
use crate::gradient::spacing::Spacing;

/// Second differences of the widths up to this fraction of the last
/// coordinate still count as uniform spacing.
pub const UNIFORMITY_TOLERANCE: f64 = 1e-15;

/// Sample coordinates and segment widths resolved from a [`Spacing`].
#[derive(Debug, Clone, PartialEq)]
pub struct KnotSpacing {
    coordinates: Vec<f64>,
    widths: Vec<f64>,
    is_uniform: bool,
}

impl KnotSpacing {
    /// Resolves `spacing` for `n` samples.
    ///
    /// A constant step `dx` puts sample `i` at `i * dx` and every width at
    /// exactly `dx`. Explicit coordinates are used as given and the widths are
    /// their first differences.
    pub fn resolve(spacing: &Spacing, n: usize) -> Result<KnotSpacing, GradientError> {
        validate_spacing(spacing, n)?;

        let knot_spacing = match spacing {
            Spacing::Constant(dx) => Self::from_step(*dx, n),
            Spacing::Coordinates(coordinates) if coordinates.len() == 1 => {
                Self::from_step(coordinates[0], n)
            }
            Spacing::Coordinates(coordinates) => Self::from_coordinates(coordinates),
        };
        Ok(knot_spacing)
    }

    fn from_step(dx: f64, n: usize) -> KnotSpacing {
        KnotSpacing {
            coordinates: (0..n).map(|i| i as f64 * dx).collect(),
            widths: vec![dx; n.saturating_sub(1)],
            is_uniform: true,
        }
    }

    fn from_coordinates(coordinates: &[f64]) -> KnotSpacing {
        let widths: Vec<f64> = coordinates
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect();
        let last_coordinate = coordinates.last().copied().unwrap_or(0.0);
        let is_uniform = Self::widths_are_uniform(&widths, last_coordinate);
        KnotSpacing {
            coordinates: coordinates.to_vec(),
            widths,
            is_uniform,
        }
    }

    fn widths_are_uniform(widths: &[f64], last_coordinate: f64) -> bool {
        let tolerance = last_coordinate * UNIFORMITY_TOLERANCE;
        widths
            .windows(2)
            .all(|pair| (pair[1] - pair[0]).abs() <= tolerance)
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Informational only: every resolved spacing is integrated the same way.
    pub fn is_uniform(&self) -> bool {
        self.is_uniform
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_step_expands_to_coordinates() {
        let knots = KnotSpacing::resolve(&Spacing::Constant(0.5), 4).unwrap();

        assert_eq!(knots.coordinates(), &[0.0, 0.5, 1.0, 1.5]);
        assert_eq!(knots.widths(), &[0.5, 0.5, 0.5]);
        assert!(knots.is_uniform());
        assert_eq!(knots.len(), 4);
    }

    #[test]
    fn one_element_coordinates_act_as_constant_step() {
        let knots = KnotSpacing::resolve(&Spacing::Coordinates(vec![2.0]), 3).unwrap();

        assert_eq!(knots.coordinates(), &[0.0, 2.0, 4.0]);
        assert_eq!(knots.widths(), &[2.0, 2.0]);
    }

    #[test]
    fn explicit_coordinates_give_differences() {
        let knots = KnotSpacing::resolve(&Spacing::Coordinates(vec![1.0, 2.0, 4.0, 4.5]), 4).unwrap();

        assert_eq!(knots.coordinates(), &[1.0, 2.0, 4.0, 4.5]);
        assert_eq!(knots.widths(), &[1.0, 2.0, 0.5]);
        assert!(!knots.is_uniform());
    }

    #[test]
    fn evenly_spaced_coordinates_are_uniform() {
        let knots = KnotSpacing::resolve(&Spacing::Coordinates(vec![0.0, 0.25, 0.5, 0.75, 1.0]), 5).unwrap();
        assert!(knots.is_uniform());

        let two = KnotSpacing::resolve(&Spacing::Coordinates(vec![3.0, 7.0]), 2).unwrap();
        assert!(two.is_uniform());
        assert_eq!(two.widths(), &[4.0]);
    }

    #[test]
    fn rounding_noise_is_tolerated_relative_to_last_coordinate() {
        let xs: Vec<f64> = (0..11).map(|i| 1000.0 + i as f64 * 0.1).collect();
        let knots = KnotSpacing::resolve(&Spacing::Coordinates(xs), 11).unwrap();
        assert!(knots.is_uniform());

        let skewed = vec![1000.0, 1000.1, 1000.2 + 1e-9, 1000.3];
        let knots = KnotSpacing::resolve(&Spacing::Coordinates(skewed), 4).unwrap();
        assert!(!knots.is_uniform());
    }

    #[test]
    fn invalid_spacing_is_rejected() {
        assert!(matches!(
            KnotSpacing::resolve(&Spacing::Coordinates(vec![0.0, 1.0]), 3),
            Err(GradientError::SpacingError { expected: 3, actual: 2 })
        ));
        assert!(matches!(
            KnotSpacing::resolve(&Spacing::Coordinates(vec![0.0, 2.0, 2.0]), 3),
            Err(GradientError::MonotonicityError { index: 1, .. })
        ));
    }
}
