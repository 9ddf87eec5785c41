//! Pre-fit linear dimensionality reduction

use std::path::Path;

use faer::Mat;
use serde::Deserialize;

use super::error::ArtifactError;
use super::{read_artifact_json, Transform, ARTIFACT_FORMAT_VERSION};
use crate::pipeline::FEATURE_COUNT;

/// On-disk schema for the projection artifact.
#[derive(Debug, Deserialize)]
struct ProjectionFile {
    format_version: u32,
    mean: Vec<f64>,
    /// One row per output component, each of input-space length.
    components: Vec<Vec<f64>>,
}

/// Fixed linear map from the standardized feature space to a smaller basis.
///
/// The output dimension is whatever the artifact was fit with; nothing in
/// this crate assumes a particular component count.
#[derive(Debug, Clone)]
pub struct LinearProjection {
    mean: Vec<f64>,
    components: Mat<f64>,
}

impl LinearProjection {
    /// Load and validate the projection from a JSON artifact file.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file: ProjectionFile = read_artifact_json(path)?;

        if file.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                artifact: "projection",
                found: file.format_version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }
        if file.mean.len() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "projection mean",
                expected: FEATURE_COUNT,
                found: file.mean.len(),
            });
        }
        if file.components.is_empty() {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "projection components",
                expected: 1,
                found: 0,
            });
        }
        for row in &file.components {
            if row.len() != FEATURE_COUNT {
                return Err(ArtifactError::DimensionMismatch {
                    artifact: "projection components",
                    expected: FEATURE_COUNT,
                    found: row.len(),
                });
            }
        }

        let n_components = file.components.len();
        let mut components = Mat::<f64>::zeros(n_components, FEATURE_COUNT);
        for (i, row) in file.components.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                components[(i, j)] = value;
            }
        }

        Ok(Self {
            mean: file.mean,
            components,
        })
    }
}

impl Transform for LinearProjection {
    fn output_dim(&self) -> usize {
        self.components.nrows()
    }

    fn transform(&self, input: &[f64]) -> Vec<f64> {
        // y_i = sum_j components[i][j] * (x_j - mean_j)
        (0..self.components.nrows())
            .map(|i| {
                input
                    .iter()
                    .zip(self.mean.iter())
                    .enumerate()
                    .map(|(j, (&x, &m))| self.components[(i, j)] * (x - m))
                    .sum()
            })
            .collect()
    }
}
