//! Overview export bundle
//!
//! Writes a zip archive holding the overview as JSON plus a verbatim copy
//! of the dataset file, so a report can be shared as a single artifact.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::overview::{DatasetOverview, TARGET_COLUMN};

/// Metadata about the overview run
#[derive(Serialize)]
pub struct OverviewMetadata {
    /// Timestamp of the report (ISO 8601 format)
    pub timestamp: String,
    /// Firesight version
    pub firesight_version: String,
    /// Dataset file path
    pub dataset_file: String,
    /// Target column name
    pub target_column: String,
}

/// Complete overview export with metadata
#[derive(Serialize)]
pub struct OverviewExport<'a> {
    /// Metadata about the overview run
    pub metadata: OverviewMetadata,
    /// The computed overview
    pub overview: &'a DatasetOverview,
}

/// Write the overview bundle: `overview.json` plus a copy of the dataset.
///
/// # Arguments
/// * `overview` - The computed dataset overview
/// * `dataset_path` - Dataset file to copy into the bundle
/// * `output_path` - Path of the zip archive to create
pub fn export_overview_bundle(
    overview: &DatasetOverview,
    dataset_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let export = OverviewExport {
        metadata: OverviewMetadata {
            timestamp: Utc::now().to_rfc3339(),
            firesight_version: env!("CARGO_PKG_VERSION").to_string(),
            dataset_file: dataset_path.display().to_string(),
            target_column: TARGET_COLUMN.to_string(),
        },
        overview,
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize overview to JSON")?;

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create export file: {}", output_path.display()))?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    archive
        .start_file("overview.json", options)
        .context("Failed to start overview.json in archive")?;
    archive.write_all(json.as_bytes())?;

    let dataset_name = dataset_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset.csv");
    archive
        .start_file(dataset_name, options)
        .with_context(|| format!("Failed to start {} in archive", dataset_name))?;
    let mut dataset = File::open(dataset_path)
        .with_context(|| format!("Failed to open dataset: {}", dataset_path.display()))?;
    std::io::copy(&mut dataset, &mut archive)
        .context("Failed to copy dataset into archive")?;

    archive.finish().context("Failed to finalize archive")?;
    Ok(())
}
