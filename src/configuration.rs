use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::gradient::gradienterror::GradientError;
use crate::gradient::inputvalidator::validate_initial_values;
use crate::gradient::intgrad::reconstruct;
use crate::gradient::spacing::Spacing;

#[derive(Deserialize)]
#[serde(untagged)]
enum InitialValueJsonProp {
    Scalar(f64),
    Sequence(Vec<f64>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ReconstructionConfigJsonProp {
    #[serde(default)]
    spacing: Spacing,
    initial: Option<InitialValueJsonProp>,
}

/// Spacing and integration constant for a reconstruction.
///
/// JSON form, both fields optional:
///
/// ```json
/// { "spacing": 0.001, "initial": 2.0 }
/// { "spacing": [0.0, 0.5, 1.5, 2.0] }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructionConfig {
    spacing: Spacing,
    initial: f64,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        ReconstructionConfig {
            spacing: Spacing::default(),
            initial: 0.0,
        }
    }
}

impl ReconstructionConfig {
    pub fn new(spacing: Spacing, initial: f64) -> ReconstructionConfig {
        ReconstructionConfig { spacing, initial }
    }

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<ReconstructionConfig, GradientError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        debug!(path = %file_path.display(), "loaded reconstruction config");
        Self::from_json_value(json_value)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<ReconstructionConfig, GradientError> {
        let json_prop: ReconstructionConfigJsonProp = serde_json::from_value(json_value)?;
        let initial = match json_prop.initial {
            None => 0.0,
            Some(InitialValueJsonProp::Scalar(initial)) => initial,
            Some(InitialValueJsonProp::Sequence(values)) => validate_initial_values(&values)?,
        };
        Ok(ReconstructionConfig::new(json_prop.spacing, initial))
    }

    pub fn reconstruct(&self, derivative: &[f64]) -> Result<Vec<f64>, GradientError> {
        reconstruct(derivative, &self.spacing, self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn defaults_to_unit_spacing_and_zero_initial() {
        let config = ReconstructionConfig::from_json_value(json!({})).unwrap();

        assert_eq!(config, ReconstructionConfig::default());
        assert_eq!(config.spacing(), &Spacing::Constant(1.0));
        assert_eq!(config.initial(), 0.0);
    }

    #[test]
    fn reads_scalar_and_vector_spacing() {
        let scalar = ReconstructionConfig::from_json_value(json!({ "spacing": 0.5, "initial": 2 })).unwrap();
        assert_eq!(scalar, ReconstructionConfig::new(Spacing::Constant(0.5), 2.0));

        let vector = ReconstructionConfig::from_json_value(json!({ "spacing": [0, 1, 3] })).unwrap();
        assert_eq!(vector.spacing(), &Spacing::Coordinates(vec![0.0, 1.0, 3.0]));
    }

    #[test]
    fn one_element_initial_is_a_scalar() {
        let config = ReconstructionConfig::from_json_value(json!({ "initial": [4.5] })).unwrap();
        assert_eq!(config.initial(), 4.5);
    }

    #[test]
    fn rejects_non_scalar_initial() {
        assert!(matches!(
            ReconstructionConfig::from_json_value(json!({ "initial": [1.0, 2.0] })),
            Err(GradientError::ValueError(_))
        ));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            ReconstructionConfig::from_json_value(json!({ "spacing": "wide" })),
            Err(GradientError::JsonParseError(_))
        ));
        assert!(matches!(
            ReconstructionConfig::from_json_value(json!({ "method": 2 })),
            Err(GradientError::JsonParseError(_))
        ));
    }

    #[test]
    fn reconstructs_with_configured_arguments() {
        let config = ReconstructionConfig::new(Spacing::Constant(2.0), 1.0);
        assert_eq!(config.reconstruct(&[0.5; 4]).unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("intgrad-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "spacing": [0.0, 0.5, 1.5], "initial": -1.0 }"#).unwrap();

        let config = ReconstructionConfig::from_reader(&path);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.spacing(), &Spacing::Coordinates(vec![0.0, 0.5, 1.5]));
        assert_eq!(config.initial(), -1.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            ReconstructionConfig::from_reader("/nonexistent/intgrad/config.json"),
            Err(GradientError::IOError(_))
        ));
    }
}
