//! Error types for artifact loading and validation.
//!
//! Every variant here is fatal at startup: the predictor cannot run with a
//! missing, malformed, or dimensionally inconsistent artifact set.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading the pre-fit model artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be read from disk.
    #[error("Failed to read artifact file {path}: {source}")]
    Io {
        /// Path of the artifact file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON or does not match the schema.
    #[error("Malformed artifact file {path}: {source}")]
    Malformed {
        /// Path of the artifact file
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact was written with a format version this build does not read.
    #[error("Unsupported {artifact} format version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Which artifact reported the version
        artifact: &'static str,
        /// Version found in the file
        found: u32,
        /// Version this build supports
        supported: u32,
    },

    /// Vector or matrix dimension does not line up with the rest of the set.
    ///
    /// The scaler must cover all input features, the projection must accept
    /// the scaler's output, and the classifier must accept the projection's
    /// output. Any break in that chain is unrecoverable.
    #[error("{artifact}: expected dimension {expected}, found {found}")]
    DimensionMismatch {
        /// Which artifact has the wrong dimension
        artifact: &'static str,
        /// Dimension required by the rest of the artifact set
        expected: usize,
        /// Dimension found in the file
        found: usize,
    },

    /// Scaler carries a zero or non-finite scale entry.
    ///
    /// Standardization divides by the scale, so a degenerate entry would
    /// silently poison every downstream value.
    #[error("Scaler has degenerate scale {value} for feature '{feature}'")]
    DegenerateScale {
        /// Feature name at the offending index
        feature: &'static str,
        /// The stored scale value
        value: f64,
    },

    /// Classifier artifact cannot produce class probabilities.
    #[error("Classifier family '{family}' does not support probability output")]
    NoProbabilitySupport {
        /// Model family reported by the artifact
        family: String,
    },
}
