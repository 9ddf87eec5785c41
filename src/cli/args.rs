//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::pipeline::{FeatureRecordBuilder, FEATURES};

/// Firesight - predict wildfire occurrence probability from hourly weather measurements
#[derive(Parser, Debug)]
#[command(name = "firesight")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding scaler.json, projection.json, and classifier.json.
    /// Defaults to ./artifacts, then the platform data directory.
    #[arg(short, long)]
    pub artifacts: Option<PathBuf>,

    /// Skip interactive prompts; every measurement must then be supplied as a flag
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Time of day flag: 0 = Night, 1 = Day
    #[arg(long)]
    pub daynight: Option<f64>,

    /// Geographic latitude of the location [-90, 90]
    #[arg(long)]
    pub lat: Option<f64>,

    /// Geographic longitude of the location [-180, 180]
    #[arg(long)]
    pub lon: Option<f64>,

    /// Fire Weather Index [0, 250]
    #[arg(long)]
    pub fire_weather_index: Option<f64>,

    /// Mean atmospheric pressure in hPa [500, 1500]
    #[arg(long)]
    pub pressure_mean: Option<f64>,

    /// Average wind direction in degrees [0, 359]
    #[arg(long)]
    pub wind_direction_mean: Option<f64>,

    /// Wind direction standard deviation in degrees [0, 359]
    #[arg(long)]
    pub wind_direction_std: Option<f64>,

    /// Mean solar radiation in W/m2 [0, 500]
    #[arg(long)]
    pub solar_radiation_mean: Option<f64>,

    /// Mean dewpoint temperature in C [-60, 35]
    #[arg(long)]
    pub dewpoint_mean: Option<f64>,

    /// Mean cloud cover percentage [0, 100]
    #[arg(long)]
    pub cloud_cover_mean: Option<f64>,

    /// Total evapotranspiration in mm [0, 40]
    #[arg(long)]
    pub evapotranspiration_total: Option<f64>,

    /// Minimum humidity percentage [0, 100]
    #[arg(long)]
    pub humidity_min: Option<f64>,

    /// Mean temperature in C [-50, 50]
    #[arg(long)]
    pub temp_mean: Option<f64>,

    /// Temperature range in C [0, 100]
    #[arg(long)]
    pub temp_range: Option<f64>,

    /// Maximum wind speed in km/h [0, 200]
    #[arg(long)]
    pub wind_speed_max: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the training dataset behind the model
    Overview {
        /// Dataset file path (CSV or Parquet)
        #[arg(short, long)]
        data: PathBuf,

        /// Write a zip bundle (overview.json plus a dataset copy) to this path
        #[arg(long)]
        export: Option<PathBuf>,

        /// Number of histogram bins for feature distributions
        #[arg(long, default_value = "12", value_parser = validate_bins)]
        bins: usize,
    },
}

impl Cli {
    /// Resolve the artifacts directory (explicit flag, then ./artifacts,
    /// then the platform data directory).
    pub fn artifacts_dir(&self) -> PathBuf {
        crate::artifacts::resolve_artifacts_dir(self.artifacts.as_deref())
    }

    /// Seed a feature record builder from whatever flags were supplied,
    /// rejecting out-of-range values. Range checks live here because input
    /// collection owns validation; the pipeline assumes bounded values.
    pub fn seed_builder(&self) -> Result<FeatureRecordBuilder> {
        let flag_values = [
            self.daynight,
            self.lat,
            self.lon,
            self.fire_weather_index,
            self.pressure_mean,
            self.wind_direction_mean,
            self.wind_direction_std,
            self.solar_radiation_mean,
            self.dewpoint_mean,
            self.cloud_cover_mean,
            self.evapotranspiration_total,
            self.humidity_min,
            self.temp_mean,
            self.temp_range,
            self.wind_speed_max,
        ];

        let mut builder = FeatureRecordBuilder::default();
        for (i, (value, spec)) in flag_values.iter().zip(FEATURES.iter()).enumerate() {
            if let Some(v) = value {
                if !spec.in_range(*v) {
                    bail!(
                        "Value {} for --{} is outside the valid range {}",
                        v,
                        spec.flag,
                        spec.range_label()
                    );
                }
                builder.set(i, *v);
            }
        }
        Ok(builder)
    }
}

/// Validator for the histogram bin count
fn validate_bins(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid bin count", s))?;

    if !(2..=100).contains(&value) {
        Err(format!("bins must be between 2 and 100, got {}", value))
    } else {
        Ok(value)
    }
}
