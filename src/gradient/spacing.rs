use serde::{
    Deserialize,
    Serialize
};

/// Spacing of the derivative samples.
///
/// A single number is the constant distance between neighbouring samples; a
/// sequence gives the absolute coordinate of every sample. Deserializes from
/// either a JSON number or a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    Constant(f64),
    Coordinates(Vec<f64>),
}

impl Spacing {
    /// Number of values carried, as an array of spacings would report it.
    pub fn size(&self) -> usize {
        match self {
            Spacing::Constant(_) => 1,
            Spacing::Coordinates(coordinates) => coordinates.len(),
        }
    }

    /// The constant step, if the spacing holds exactly one value.
    ///
    /// A one-element coordinate list counts as a constant step.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Spacing::Constant(dx) => Some(*dx),
            Spacing::Coordinates(coordinates) if coordinates.len() == 1 => Some(coordinates[0]),
            Spacing::Coordinates(_) => None,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Constant(1.0)
    }
}

impl From<f64> for Spacing {
    fn from(dx: f64) -> Self {
        Spacing::Constant(dx)
    }
}

impl From<Vec<f64>> for Spacing {
    fn from(coordinates: Vec<f64>) -> Self {
        Spacing::Coordinates(coordinates)
    }
}

impl From<&[f64]> for Spacing {
    fn from(coordinates: &[f64]) -> Self {
        Spacing::Coordinates(coordinates.to_vec())
    }
}
