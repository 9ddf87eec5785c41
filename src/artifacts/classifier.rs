//! Pre-trained binary classifier loaded as plain parameter data

use std::path::Path;

use serde::Deserialize;

use super::error::ArtifactError;
use super::{read_artifact_json, PredictProbability, ARTIFACT_FORMAT_VERSION};

/// On-disk schema for the classifier artifact.
#[derive(Debug, Deserialize)]
struct ClassifierFile {
    format_version: u32,
    #[serde(flatten)]
    model: Classifier,
}

/// Binary classifier, tagged by model family.
///
/// The pipeline only ever calls `predict_probability`; adding a family means
/// adding a variant here and nothing else.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Classifier {
    /// Logistic regression over the projected feature space.
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

impl Classifier {
    /// Load and validate the classifier from a JSON artifact file.
    ///
    /// `expected_dim` is the projection's output dimension; the classifier
    /// must accept exactly that many inputs.
    pub fn load(path: &Path, expected_dim: usize) -> Result<Self, ArtifactError> {
        let file: ClassifierFile = read_artifact_json(path)?;

        if file.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                artifact: "classifier",
                found: file.format_version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }

        let classifier = file.model;
        if classifier.input_dim() != expected_dim {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "classifier coefficients",
                expected: expected_dim,
                found: classifier.input_dim(),
            });
        }
        if !classifier.supports_probability() {
            return Err(ArtifactError::NoProbabilitySupport {
                family: classifier.family().to_string(),
            });
        }

        Ok(classifier)
    }

    /// Model family name as it appears in the artifact file.
    pub fn family(&self) -> &'static str {
        match self {
            Classifier::LogisticRegression { .. } => "logistic_regression",
        }
    }

    /// Whether this family can emit class probabilities.
    ///
    /// Checked once at load time; `predict_probability` assumes it holds.
    pub fn supports_probability(&self) -> bool {
        match self {
            Classifier::LogisticRegression { .. } => true,
        }
    }
}

impl PredictProbability for Classifier {
    fn input_dim(&self) -> usize {
        match self {
            Classifier::LogisticRegression { coefficients, .. } => coefficients.len(),
        }
    }

    fn predict_probability(&self, input: &[f64]) -> [f64; 2] {
        match self {
            Classifier::LogisticRegression {
                coefficients,
                intercept,
            } => {
                let z: f64 = coefficients
                    .iter()
                    .zip(input.iter())
                    .map(|(&c, &x)| c * x)
                    .sum::<f64>()
                    + intercept;
                let p1 = 1.0 / (1.0 + (-z).exp());
                [1.0 - p1, p1]
            }
        }
    }
}
