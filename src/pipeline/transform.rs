//! Deterministic preprocessing: log1p, standardize, project.
//!
//! The chain is a pure function of the record and the loaded artifacts.
//! Identical inputs produce bit-identical output; there is no hidden state
//! and no randomness anywhere in it.

use anyhow::{bail, Result};

use crate::artifacts::{ArtifactStore, Transform};
use crate::pipeline::features::{FeatureRecord, FEATURES, FEATURE_COUNT};

/// Apply `ln(1 + x)` to the designated skewed features, in place.
///
/// The declared input ranges keep every log-transformed feature at or above
/// zero, so the `x < -1` domain check is unreachable through normal input
/// collection; a value below -1 is rejected rather than turned into NaN.
pub fn apply_log1p(values: &mut [f64; FEATURE_COUNT]) -> Result<()> {
    for (value, spec) in values.iter_mut().zip(FEATURES.iter()) {
        if !spec.log_transformed {
            continue;
        }
        if *value < -1.0 {
            bail!(
                "log1p domain violation for '{}': value {} is below -1",
                spec.name,
                value
            );
        }
        *value = value.ln_1p();
    }
    Ok(())
}

/// Run the full preprocessing chain: log1p on the skewed subset, then
/// standardize all features, then project to the reducer's output space.
///
/// The output length always equals the projection artifact's configured
/// output dimension, regardless of input values.
pub fn preprocess(record: &FeatureRecord, store: &ArtifactStore) -> Result<Vec<f64>> {
    let mut values = record.to_vector();
    apply_log1p(&mut values)?;
    let standardized = store.scaler().transform(&values);
    Ok(store.projection().transform(&standardized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log1p_of_zero_is_zero() {
        let mut values = [0.0; FEATURE_COUNT];
        apply_log1p(&mut values).unwrap();
        assert!(values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_log1p_is_monotonic() {
        let mut low = [0.0; FEATURE_COUNT];
        let mut high = [0.0; FEATURE_COUNT];
        low[3] = 10.0; // fire_weather_index
        high[3] = 20.0;
        apply_log1p(&mut low).unwrap();
        apply_log1p(&mut high).unwrap();
        assert!(high[3] > low[3]);
    }

    #[test]
    fn test_log1p_leaves_untransformed_fields_alone() {
        let mut values = [0.0; FEATURE_COUNT];
        values[4] = 1013.0; // pressure_mean is not log-transformed
        apply_log1p(&mut values).unwrap();
        assert_eq!(values[4], 1013.0);
    }

    #[test]
    fn test_log1p_rejects_domain_violation() {
        let mut values = [0.0; FEATURE_COUNT];
        values[3] = -2.0; // fire_weather_index below the log1p domain
        let err = apply_log1p(&mut values).unwrap_err().to_string();
        assert!(err.contains("fire_weather_index"), "got: {}", err);
    }

    #[test]
    fn test_domain_check_ignores_untransformed_negatives() {
        let mut values = [0.0; FEATURE_COUNT];
        values[1] = -90.0; // lat may be negative; it is never log-transformed
        apply_log1p(&mut values).unwrap();
        assert_eq!(values[1], -90.0);
    }
}
