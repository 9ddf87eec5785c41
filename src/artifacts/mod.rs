//! Pre-fit model artifacts: scaler, projection, and classifier.
//!
//! All three are opaque parameter blobs fitted offline and loaded once at
//! process start into an [`ArtifactStore`]. The store is read-only for the
//! process lifetime and is passed by reference to every pipeline call, so
//! the prediction path is a pure function of (record, store).

mod classifier;
mod error;
mod projection;
mod scaler;

pub use classifier::Classifier;
pub use error::ArtifactError;
pub use projection::LinearProjection;
pub use scaler::StandardScaler;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Artifact format version this build reads.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Vector-in, vector-out capability of a fitted transform.
pub trait Transform {
    /// Length of the vector produced by `transform`.
    fn output_dim(&self) -> usize;

    /// Apply the fitted transform to `input`.
    fn transform(&self, input: &[f64]) -> Vec<f64>;
}

/// Binary-class probability capability of a fitted classifier.
pub trait PredictProbability {
    /// Length of the vector `predict_probability` accepts.
    fn input_dim(&self) -> usize;

    /// Class probabilities `[p0, p1]` for `input`.
    fn predict_probability(&self, input: &[f64]) -> [f64; 2];
}

/// Read and deserialize one artifact JSON file.
fn read_artifact_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// The three fitted artifacts, loaded once and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    scaler: StandardScaler,
    projection: LinearProjection,
    classifier: Classifier,
}

impl ArtifactStore {
    /// File name of the scaler artifact inside the artifacts directory.
    pub const SCALER_FILE: &'static str = "scaler.json";
    /// File name of the projection artifact inside the artifacts directory.
    pub const PROJECTION_FILE: &'static str = "projection.json";
    /// File name of the classifier artifact inside the artifacts directory.
    pub const CLASSIFIER_FILE: &'static str = "classifier.json";

    /// Load all three artifacts from `dir` and cross-validate their
    /// dimensions: scaler covers the full feature vector, projection accepts
    /// the scaler's output, classifier accepts the projection's output.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let scaler = StandardScaler::load(&dir.join(Self::SCALER_FILE))?;
        let projection = LinearProjection::load(&dir.join(Self::PROJECTION_FILE))?;
        let classifier = Classifier::load(
            &dir.join(Self::CLASSIFIER_FILE),
            projection.output_dim(),
        )?;

        Ok(Self {
            scaler,
            projection,
            classifier,
        })
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn projection(&self) -> &LinearProjection {
        &self.projection
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Output dimension of the projection, fixed by the loaded artifact.
    pub fn projected_dim(&self) -> usize {
        self.projection.output_dim()
    }
}

/// Resolve the artifacts directory: an explicit override wins, then
/// `./artifacts`, then the platform data directory.
pub fn resolve_artifacts_dir(cli_override: Option<&Path>) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir.to_path_buf();
    }

    let local = PathBuf::from("artifacts");
    if local.is_dir() {
        return local;
    }

    dirs::data_dir()
        .map(|d| d.join("firesight").join("artifacts"))
        .unwrap_or(local)
}
