//! Integration tests for the full prediction pipeline

use firesight::artifacts::Transform;
use firesight::pipeline::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_preprocess_is_deterministic() {
    let (_temp_dir, store) = load_fixture_store();
    let record = extreme_record();

    let first = preprocess(&record, &store).unwrap();
    for _ in 0..5 {
        let again = preprocess(&record, &store).unwrap();
        let bits_first: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
        let bits_again: Vec<u64> = again.iter().map(|v| v.to_bits()).collect();
        assert_eq!(
            bits_first, bits_again,
            "Identical input must yield bit-identical output"
        );
    }
}

#[test]
fn test_projected_dimension_matches_artifact() {
    let (_temp_dir, store) = load_fixture_store();

    for record in [baseline_record(), extreme_record()] {
        let transformed = preprocess(&record, &store).unwrap();
        assert_eq!(
            transformed.len(),
            store.projected_dim(),
            "Output length must equal the reducer's configured dimension"
        );
    }
}

#[test]
fn test_standardizing_the_stored_mean_is_zero() {
    let (_temp_dir, store) = load_fixture_store();

    // The fixture scaler has zero mean, so the zero vector standardizes
    // to the zero vector
    let mean = vec![0.0; FEATURE_COUNT];
    let standardized = store.scaler().transform(&mean);
    assert!(standardized.iter().all(|&v| v == 0.0));
}

#[test]
fn test_baseline_prediction_is_valid_probability() {
    let (_temp_dir, store) = load_fixture_store();

    let prediction = predict(&baseline_record(), &store).unwrap();
    assert!(
        (0.0..=1.0).contains(&prediction.probability),
        "Probability out of range: {}",
        prediction.probability
    );
}

#[test]
fn test_extreme_conditions_raise_probability_over_baseline() {
    let (_temp_dir, store) = load_fixture_store();

    let baseline = predict(&baseline_record(), &store).unwrap();
    let extreme = predict(&extreme_record(), &store).unwrap();

    // Relative ordering only; the exact values depend on the artifact set
    assert!(
        extreme.probability > baseline.probability,
        "Expected extreme ({}) > baseline ({})",
        extreme.probability,
        baseline.probability
    );
}

#[test]
fn test_missing_field_fails_before_the_pipeline() {
    let mut builder = default_builder();
    builder.temp_mean = None;

    let err = builder.build().unwrap_err().to_string();
    assert!(err.contains("temp_mean"), "got: {}", err);
}

#[test]
fn test_log1p_domain_violation_is_rejected() {
    let (_temp_dir, store) = load_fixture_store();

    // Builder does not range-check (that is the input layer's job), so a
    // value below -1 can reach the pipeline and must fail loudly there
    let mut builder = default_builder();
    builder.fire_weather_index = Some(-2.0);
    let record = builder.build().unwrap();

    let err = predict(&record, &store).unwrap_err().to_string();
    assert!(err.contains("fire_weather_index"), "got: {}", err);
    assert!(err.contains("log1p"), "got: {}", err);
}

#[test]
fn test_prediction_label_follows_threshold() {
    let (_temp_dir, store) = load_fixture_store();

    let extreme = predict(&extreme_record(), &store).unwrap();
    // comp0 = log1p(250) + log1p(200) ~ 10.8, so the fixture classifier
    // saturates well above the 0.4 cutoff
    assert_eq!(extreme.label, RiskLabel::Likely);

    let baseline = predict(&baseline_record(), &store).unwrap();
    // sigmoid(-0.5) ~ 0.378 < 0.4
    assert_eq!(baseline.label, RiskLabel::Unlikely);
}

#[test]
fn test_humidity_lowers_probability_under_fixture_model() {
    let (_temp_dir, store) = load_fixture_store();

    let dry = predict(&baseline_record(), &store).unwrap();

    let mut builder = default_builder();
    builder.humidity_min = Some(90.0);
    let humid = predict(&builder.build().unwrap(), &store).unwrap();

    assert!(
        humid.probability < dry.probability,
        "Expected humid ({}) < dry ({})",
        humid.probability,
        dry.probability
    );
}
