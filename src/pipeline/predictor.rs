//! Adapter over the loaded classifier's probability output

use anyhow::Result;

use crate::artifacts::{ArtifactStore, PredictProbability};
use crate::pipeline::decision::{classify, Prediction};
use crate::pipeline::features::FeatureRecord;
use crate::pipeline::transform::preprocess;

/// Extract the class-1 (occurrence) probability for a transformed vector.
///
/// Delegates entirely to the classifier; probability support was verified
/// when the artifact store was assembled, not here.
pub fn class1_probability(store: &ArtifactStore, transformed: &[f64]) -> f64 {
    store.classifier().predict_probability(transformed)[1]
}

/// Run one full prediction: preprocess, score, threshold.
pub fn predict(record: &FeatureRecord, store: &ArtifactStore) -> Result<Prediction> {
    let transformed = preprocess(record, store)?;
    let probability = class1_probability(store, &transformed);
    Ok(Prediction {
        probability,
        label: classify(probability),
    })
}
