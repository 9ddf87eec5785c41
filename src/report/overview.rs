//! Training-dataset overview report.
//!
//! Summarizes the dataset the model was fit on: shape, class balance,
//! per-feature statistics, selected feature distributions, and missing-data
//! status. Everything here is read-only over the loaded frame.

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

use crate::pipeline::{FeatureSpec, FEATURES};
use crate::utils::{create_progress_bar, print_info, print_section, print_success, print_warning};

/// Name of the binary target column in the training dataset.
pub const TARGET_COLUMN: &str = "occurred";

/// Legacy misspelling of the target column, still present in older exports.
const TARGET_COLUMN_LEGACY: &str = "occured";

/// Features whose distributions the report renders as histograms.
const DISTRIBUTION_FEATURES: [&str; 4] = [
    "temp_mean",
    "humidity_min",
    "wind_speed_max",
    "fire_weather_index",
];

/// Load the training dataset (CSV or Parquet based on extension) and
/// normalize the legacy target column spelling.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    let mut df = lf
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    if columns.iter().any(|c| c == TARGET_COLUMN_LEGACY)
        && !columns.iter().any(|c| c == TARGET_COLUMN)
    {
        df.rename(TARGET_COLUMN_LEGACY, TARGET_COLUMN.into())?;
    }

    Ok(df)
}

/// Fire / no-fire observation counts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassBalance {
    pub no_fire: usize,
    pub fire: usize,
}

impl ClassBalance {
    pub fn total(&self) -> usize {
        self.no_fire + self.fire
    }

    /// Wildfire occurrences as a percentage of all observations.
    pub fn fire_pct(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.fire as f64 / self.total() as f64 * 100.0
        }
    }
}

/// Summary statistics for one feature column.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
    pub missing_pct: f64,
}

/// Fixed-width histogram of one feature column.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureHistogram {
    pub name: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
}

/// Complete overview of the training dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetOverview {
    pub rows: usize,
    pub cols: usize,
    pub memory_mb: f64,
    pub class_balance: ClassBalance,
    pub features: Vec<FeatureSummary>,
    pub histograms: Vec<FeatureHistogram>,
}

/// Compute the full overview from a loaded frame.
pub fn build_overview(df: &DataFrame, bins: usize) -> Result<DatasetOverview> {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);

    let class_balance = class_balance(df)?;

    // Per-feature statistics in parallel; features absent from the frame
    // are skipped rather than treated as errors.
    let pb = create_progress_bar(FEATURES.len() as u64, "Feature statistics");
    let features: Vec<Option<FeatureSummary>> = FEATURES
        .par_iter()
        .map(|spec| {
            let summary = summarize_column(df, spec);
            pb.inc(1);
            summary
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_and_clear();
    let features: Vec<FeatureSummary> = features.into_iter().flatten().collect();

    let mut histograms = Vec::new();
    for name in DISTRIBUTION_FEATURES {
        let spec = FEATURES
            .iter()
            .find(|s| s.name == name)
            .expect("distribution feature must be in the feature table");
        if let Some(hist) = histogram_column(df, spec, bins)? {
            histograms.push(hist);
        }
    }

    Ok(DatasetOverview {
        rows,
        cols,
        memory_mb,
        class_balance,
        features,
        histograms,
    })
}

/// Count fire / no-fire observations in the target column.
fn class_balance(df: &DataFrame) -> Result<ClassBalance> {
    let column = df
        .column(TARGET_COLUMN)
        .with_context(|| format!("Target column '{}' not found in dataset", TARGET_COLUMN))?;
    let casted = column
        .cast(&DataType::Int64)
        .with_context(|| format!("Target column '{}' must be numeric", TARGET_COLUMN))?;
    let ca = casted.i64()?;

    let mut balance = ClassBalance { no_fire: 0, fire: 0 };
    for value in ca.iter() {
        match value {
            Some(0) => balance.no_fire += 1,
            Some(1) => balance.fire += 1,
            Some(other) => bail!(
                "Target column '{}' must be binary 0/1, found {}",
                TARGET_COLUMN,
                other
            ),
            None => bail!("Target column '{}' contains missing values", TARGET_COLUMN),
        }
    }

    Ok(balance)
}

/// Summary statistics for one feature column, or `None` if the column is
/// not present in the frame.
fn summarize_column(df: &DataFrame, spec: &FeatureSpec) -> Result<Option<FeatureSummary>> {
    let column = match df.column(spec.name) {
        Ok(c) => c,
        Err(_) => return Ok(None),
    };

    let total = column.len();
    let nulls = column.null_count();
    let casted = column
        .cast(&DataType::Float64)
        .with_context(|| format!("Feature column '{}' must be numeric", spec.name))?;
    let ca = casted.f64()?;

    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum_sq_dev = 0.0;
    let mut mean = 0.0;

    // Single-pass Welford accumulation over non-null values
    for value in ca.iter().flatten() {
        count += 1;
        min = min.min(value);
        max = max.max(value);
        let delta = value - mean;
        mean += delta / count as f64;
        sum_sq_dev += delta * (value - mean);
    }

    if count == 0 {
        return Ok(Some(FeatureSummary {
            name: spec.name.to_string(),
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            std: f64::NAN,
            missing_pct: 100.0,
        }));
    }

    let std = (sum_sq_dev / count as f64).sqrt();

    Ok(Some(FeatureSummary {
        name: spec.name.to_string(),
        min,
        max,
        mean,
        std,
        missing_pct: nulls as f64 / total as f64 * 100.0,
    }))
}

/// Fixed-bin histogram of one feature column, or `None` if the column is
/// absent or has no non-null values.
fn histogram_column(df: &DataFrame, spec: &FeatureSpec, bins: usize) -> Result<Option<FeatureHistogram>> {
    let column = match df.column(spec.name) {
        Ok(c) => c,
        Err(_) => return Ok(None),
    };
    let casted = column
        .cast(&DataType::Float64)
        .with_context(|| format!("Feature column '{}' must be numeric", spec.name))?;
    let ca = casted.f64()?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for value in ca.iter().flatten() {
        min = min.min(value);
        max = max.max(value);
        any = true;
    }
    if !any {
        return Ok(None);
    }

    let mut counts = vec![0usize; bins];
    let width = (max - min) / bins as f64;
    for value in ca.iter().flatten() {
        let idx = if width == 0.0 {
            0
        } else {
            (((value - min) / width) as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }

    Ok(Some(FeatureHistogram {
        name: spec.name.to_string(),
        label: histogram_label(spec),
        min,
        max,
        counts,
    }))
}

fn histogram_label(spec: &FeatureSpec) -> String {
    match spec.unit {
        Some(unit) => format!("{} ({})", spec.label, unit),
        None => spec.label.to_string(),
    }
}

impl DatasetOverview {
    /// Render the full report to the terminal.
    pub fn display(&self) {
        self.display_summary();
        self.display_class_balance();
        self.display_feature_groups();
        self.display_distributions();
        self.display_missing();
        self.display_limitations();
    }

    fn display_summary(&self) {
        print_section("DATASET SUMMARY");
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("Observations"),
            Cell::new(format_count(self.rows)),
        ]);
        table.add_row(vec![Cell::new("Columns"), Cell::new(self.cols)]);
        table.add_row(vec![
            Cell::new("Features"),
            Cell::new(self.cols.saturating_sub(1)),
        ]);
        table.add_row(vec![Cell::new("Target"), Cell::new("Wildfire occurrence")]);
        table.add_row(vec![Cell::new("Target type"), Cell::new("Binary")]);
        table.add_row(vec![
            Cell::new("Estimated memory"),
            Cell::new(format!("{:.2} MB", self.memory_mb)),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "      {} = 1 {} wildfire detected",
            style(TARGET_COLUMN).yellow(),
            style("→").dim()
        );
        println!(
            "      {} = 0 {} no wildfire detected",
            style(TARGET_COLUMN).yellow(),
            style("→").dim()
        );
    }

    fn display_class_balance(&self) {
        print_section("CLASS BALANCE");
        println!();

        let total = self.class_balance.total().max(1);
        let fire_pct = self.class_balance.fire_pct();
        let bar_width = 40usize;
        let fire_bar = (self.class_balance.fire * bar_width).div_euclid(total);

        println!(
            "      {:<9} {} {}",
            "Fire",
            style("█".repeat(fire_bar)).red(),
            style(format!(
                "{} ({:.2}%)",
                format_count(self.class_balance.fire),
                fire_pct
            ))
            .dim()
        );
        println!(
            "      {:<9} {} {}",
            "No fire",
            style("█".repeat(bar_width - fire_bar)).cyan(),
            style(format!(
                "{} ({:.2}%)",
                format_count(self.class_balance.no_fire),
                100.0 - fire_pct
            ))
            .dim()
        );

        println!();
        if (40.0..=60.0).contains(&fire_pct) {
            print_info(
                "Classes are nearly evenly represented; standard probability \
                 thresholds apply without re-weighting",
            );
        } else {
            print_warning("Classes are imbalanced; interpret probabilities with care");
        }
    }

    fn display_feature_groups(&self) {
        print_section("FEATURE GROUPS");
        println!();
        let groups = [
            ("Geographic", "lat, lon"),
            (
                "Atmospheric & moisture",
                "pressure_mean, humidity_min, dewpoint_mean, cloud_cover_mean",
            ),
            ("Radiation & energy", "solar_radiation_mean"),
            ("Temperature", "temp_mean, temp_range"),
            (
                "Wind",
                "wind_speed_max, wind_direction_mean, wind_direction_std",
            ),
            ("Fire indices", "fire_weather_index"),
        ];
        for (group, members) in groups {
            println!(
                "      {} {}",
                style(format!("{:<24}", group)).yellow(),
                style(members).dim()
            );
        }
    }

    fn display_distributions(&self) {
        print_section("FEATURE DISTRIBUTIONS");

        for hist in &self.histograms {
            println!();
            println!("      {}", style(&hist.label).white().bold());

            let peak = hist.counts.iter().copied().max().unwrap_or(0).max(1);
            let width = (hist.max - hist.min) / hist.counts.len() as f64;
            for (i, &count) in hist.counts.iter().enumerate() {
                let lo = hist.min + width * i as f64;
                let bar_len = (count * 40).div_euclid(peak);
                println!(
                    "      {:>9.1} {} {}",
                    lo,
                    style("█".repeat(bar_len)).cyan(),
                    style(format_count(count)).dim()
                );
            }
        }

        println!();
        print_info(
            "Several features are right-skewed; the pipeline applies log1p \
             to those before scaling and projection",
        );
    }

    fn display_missing(&self) {
        print_section("MISSING DATA");
        println!();

        let missing: Vec<&FeatureSummary> = self
            .features
            .iter()
            .filter(|f| f.missing_pct > 0.0)
            .collect();

        if missing.is_empty() {
            print_success("No missing values detected in the dataset");
            return;
        }

        print_warning("Some features contain missing values:");
        for feature in missing {
            println!(
                "        {} {} {}",
                style("•").dim(),
                feature.name,
                style(format!("{:.2}%", feature.missing_pct)).yellow()
            );
        }
    }

    fn display_limitations(&self) {
        print_section("LIMITATIONS & ASSUMPTIONS");
        println!();
        let limitations = [
            "Human ignition sources are not explicitly modeled",
            "Fuel moisture and vegetation type are not directly observed",
            "Spatial resolution may not capture microclimate effects",
            "Historical reporting bias may affect occurrence records",
        ];
        for item in limitations {
            println!("      {} {}", style("•").dim(), item);
        }
    }
}

fn format_count(n: usize) -> String {
    // Thousands separator, e.g. 12345 -> "12,345"
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
