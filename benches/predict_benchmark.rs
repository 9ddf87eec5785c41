//! Benchmark for the preprocessing and prediction path
//!
//! Run with: cargo bench --bench predict_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;

use firesight::artifacts::ArtifactStore;
use firesight::pipeline::{predict, preprocess, FeatureRecordBuilder, FEATURES};

/// Build one fully populated record from the documented defaults.
fn sample_record() -> firesight::pipeline::FeatureRecord {
    let mut builder = FeatureRecordBuilder::default();
    for (i, spec) in FEATURES.iter().enumerate() {
        builder.set(i, spec.default);
    }
    builder.fire_weather_index = Some(62.4);
    builder.humidity_min = Some(18.0);
    builder.wind_speed_max = Some(47.3);
    builder.temp_mean = Some(29.6);
    builder.build().unwrap()
}

fn bench_predict(c: &mut Criterion) {
    // Uses the shipped artifact set at the crate root
    let store = ArtifactStore::load(Path::new("artifacts")).unwrap();
    let record = sample_record();

    c.bench_function("preprocess", |b| {
        b.iter(|| preprocess(black_box(&record), black_box(&store)).unwrap())
    });

    c.bench_function("predict", |b| {
        b.iter(|| predict(black_box(&record), black_box(&store)).unwrap())
    });
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
