//! Shared test utilities and fixture generators

use std::path::{Path, PathBuf};

use polars::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use firesight::artifacts::ArtifactStore;
use firesight::pipeline::{FeatureRecord, FeatureRecordBuilder, FEATURES};

/// Write a fixture artifact set with analytically convenient parameters:
///
/// - scaler: zero mean, unit scale (standardization is the identity)
/// - projection: two components, `c0 = x[fwi] + x[wind_speed_max]` and
///   `c1 = x[humidity_min]`
/// - classifier: logistic regression with coefficients `[1.0, -1.0]` and
///   intercept `-0.5`
///
/// With this set, raising the fire weather index or the maximum wind speed
/// strictly raises the predicted probability, and raising minimum humidity
/// strictly lowers it.
pub fn write_fixture_artifacts(dir: &Path) {
    let n = FEATURES.len();

    let scaler = json!({
        "format_version": 1,
        "mean": vec![0.0; n],
        "scale": vec![1.0; n],
    });

    let mut component_fire = vec![0.0; n];
    component_fire[3] = 1.0; // fire_weather_index
    component_fire[14] = 1.0; // wind_speed_max
    let mut component_humidity = vec![0.0; n];
    component_humidity[11] = 1.0; // humidity_min

    let projection = json!({
        "format_version": 1,
        "mean": vec![0.0; n],
        "components": [component_fire, component_humidity],
    });

    let classifier = json!({
        "format_version": 1,
        "family": "logistic_regression",
        "coefficients": [1.0, -1.0],
        "intercept": -0.5,
    });

    std::fs::write(
        dir.join(ArtifactStore::SCALER_FILE),
        serde_json::to_string_pretty(&scaler).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join(ArtifactStore::PROJECTION_FILE),
        serde_json::to_string_pretty(&projection).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join(ArtifactStore::CLASSIFIER_FILE),
        serde_json::to_string_pretty(&classifier).unwrap(),
    )
    .unwrap();
}

/// Create a temp directory holding the fixture artifact set and load it.
pub fn load_fixture_store() -> (TempDir, ArtifactStore) {
    let temp_dir = TempDir::new().unwrap();
    write_fixture_artifacts(temp_dir.path());
    let store = ArtifactStore::load(temp_dir.path()).unwrap();
    (temp_dir, store)
}

/// Builder with every field set to its documented default: zeros except
/// mean pressure at 1013.0.
pub fn default_builder() -> FeatureRecordBuilder {
    let mut builder = FeatureRecordBuilder::default();
    for (i, spec) in FEATURES.iter().enumerate() {
        builder.set(i, spec.default);
    }
    builder
}

/// The all-defaults record (scenario baseline).
pub fn baseline_record() -> FeatureRecord {
    default_builder().build().unwrap()
}

/// Baseline plus extreme fire-favoring conditions: maximum fire weather
/// index, maximum wind speed, minimum humidity.
pub fn extreme_record() -> FeatureRecord {
    let mut builder = default_builder();
    builder.fire_weather_index = Some(250.0);
    builder.wind_speed_max = Some(200.0);
    builder.humidity_min = Some(0.0);
    builder.build().unwrap()
}

/// Small training-dataset fixture: all 15 feature columns plus a binary
/// `occurred` target, 10 rows, 4 of them fires.
pub fn create_wildfire_dataframe() -> DataFrame {
    df! {
        "daynight_N" => [0i64, 1, 1, 0, 1, 0, 1, 0, 1, 1],
        "lat" => [34.1f64, -12.7, 45.0, 3.2, -33.9, 51.5, 37.8, -1.3, 40.4, 35.7],
        "lon" => [-118.2f64, 132.6, -75.4, 101.7, 18.4, -0.1, -122.4, 36.8, -3.7, 139.7],
        "fire_weather_index" => [12.0f64, 85.0, 3.5, 40.2, 110.6, 0.8, 64.3, 22.1, 5.9, 91.4],
        "pressure_mean" => [1013.0f64, 1009.4, 1021.7, 1011.2, 1006.8, 1018.3, 1010.5, 1014.9, 1016.2, 1008.1],
        "wind_direction_mean" => [180.0f64, 225.3, 90.7, 310.2, 45.8, 135.4, 270.1, 15.6, 200.9, 300.3],
        "wind_direction_std" => [12.4f64, 45.1, 8.2, 30.7, 60.3, 5.1, 38.9, 14.2, 9.8, 52.6],
        "solar_radiation_mean" => [210.5f64, 340.2, 15.8, 180.4, 420.7, 0.0, 290.3, 120.6, 60.2, 380.9],
        "dewpoint_mean" => [8.2f64, 14.6, -3.1, 21.4, 11.9, 4.7, 9.8, 18.2, 2.3, 13.5],
        "cloud_cover_mean" => [20.0f64, 5.4, 85.2, 40.7, 2.1, 95.6, 15.3, 60.8, 75.4, 8.9],
        "evapotranspiration_total" => [0.3f64, 0.8, 0.05, 0.4, 1.1, 0.02, 0.6, 0.2, 0.1, 0.9],
        "humidity_min" => [35.0f64, 12.4, 78.2, 45.6, 8.1, 88.9, 18.7, 52.3, 67.8, 10.2],
        "temp_mean" => [22.4f64, 31.8, 5.2, 27.6, 34.9, 8.1, 29.3, 24.7, 12.6, 33.2],
        "temp_range" => [8.1f64, 14.2, 3.6, 10.8, 16.4, 2.9, 12.7, 7.4, 5.2, 15.8],
        "wind_speed_max" => [25.3f64, 68.4, 12.1, 40.9, 85.7, 8.6, 52.4, 20.8, 15.3, 74.2],
        "occurred" => [0i64, 1, 0, 0, 1, 0, 1, 0, 0, 1],
    }
    .unwrap()
}

/// Larger random dataset for stress tests: every feature column sampled
/// uniformly within its declared range, plus a random binary target.
pub fn create_large_wildfire_dataframe(rows: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut columns: Vec<Column> = Vec::with_capacity(FEATURES.len() + 1);
    for spec in FEATURES.iter() {
        let values: Vec<f64> = (0..rows)
            .map(|_| rng.gen_range(spec.min..=spec.max))
            .collect();
        columns.push(Column::new(spec.name.into(), values));
    }
    let target: Vec<i64> = (0..rows).map(|_| rng.gen_range(0..2)).collect();
    columns.push(Column::new("occurred".into(), target));

    DataFrame::new(columns).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}
