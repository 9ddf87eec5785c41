//! Pre-fit standardization parameters

use std::path::Path;

use serde::Deserialize;

use super::error::ArtifactError;
use super::{read_artifact_json, Transform, ARTIFACT_FORMAT_VERSION};
use crate::pipeline::{FEATURES, FEATURE_COUNT};

/// Per-feature mean and standard deviation fitted on the training data.
///
/// `transform` computes `(x - mean_i) / scale_i` for each feature. The
/// parameters are immutable after load; the fit happened offline.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    format_version: u32,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Load and validate the scaler from a JSON artifact file.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let scaler: StandardScaler = read_artifact_json(path)?;
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                artifact: "scaler",
                found: self.format_version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }
        if self.mean.len() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "scaler mean",
                expected: FEATURE_COUNT,
                found: self.mean.len(),
            });
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "scaler scale",
                expected: FEATURE_COUNT,
                found: self.scale.len(),
            });
        }
        for (i, &s) in self.scale.iter().enumerate() {
            if s == 0.0 || !s.is_finite() {
                return Err(ArtifactError::DegenerateScale {
                    feature: FEATURES[i].name,
                    value: s,
                });
            }
        }
        Ok(())
    }

}

impl Transform for StandardScaler {
    fn output_dim(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, input: &[f64]) -> Vec<f64> {
        input
            .iter()
            .zip(self.mean.iter())
            .zip(self.scale.iter())
            .map(|((&x, &m), &s)| (x - m) / s)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_scaler() -> StandardScaler {
        StandardScaler {
            format_version: ARTIFACT_FORMAT_VERSION,
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }

    #[test]
    fn test_identity_transform_with_zero_mean_unit_scale() {
        let scaler = unit_scaler();
        let input: Vec<f64> = (0..FEATURE_COUNT).map(|i| i as f64).collect();
        assert_eq!(scaler.transform(&input), input);
    }

    #[test]
    fn test_transform_at_stored_mean_is_zero_vector() {
        let mean: Vec<f64> = (0..FEATURE_COUNT).map(|i| 1.5 * i as f64).collect();
        let scaler = StandardScaler {
            format_version: ARTIFACT_FORMAT_VERSION,
            mean: mean.clone(),
            scale: vec![2.0; FEATURE_COUNT],
        };
        let out = scaler.transform(&mean);
        assert!(out.iter().all(|&v| v == 0.0), "got {:?}", out);
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let mut scaler = unit_scaler();
        scaler.scale[3] = 0.0;
        let err = scaler.validate().unwrap_err();
        assert!(matches!(err, ArtifactError::DegenerateScale { .. }));
        assert!(err.to_string().contains("fire_weather_index"));
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        let mut scaler = unit_scaler();
        scaler.mean.pop();
        assert!(matches!(
            scaler.validate().unwrap_err(),
            ArtifactError::DimensionMismatch { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_version() {
        let mut scaler = unit_scaler();
        scaler.format_version = 99;
        assert!(matches!(
            scaler.validate().unwrap_err(),
            ArtifactError::UnsupportedVersion { .. }
        ));
    }
}
