//! Fixed-order feature record for the prediction pipeline.
//!
//! The scaler, projection, and classifier were fit against a specific column
//! order; this module pins that order at compile time so the prediction path
//! never does a column-name lookup. All measurements cover a one-hour period.

use anyhow::{bail, Result};

/// Number of input features the fitted artifacts expect.
pub const FEATURE_COUNT: usize = 15;

/// Declared metadata for a single input feature.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    /// Column name in the training dataset
    pub name: &'static str,
    /// Long command-line flag that sets this feature
    pub flag: &'static str,
    /// Human-readable label for prompts and reports
    pub label: &'static str,
    /// Measurement unit, if any
    pub unit: Option<&'static str>,
    /// Inclusive lower bound accepted at input collection
    pub min: f64,
    /// Inclusive upper bound accepted at input collection
    pub max: f64,
    /// Default offered by the interactive prompt
    pub default: f64,
    /// Whether the preprocessing pipeline applies log1p to this feature
    pub log_transformed: bool,
    /// Help text shown alongside the prompt
    pub help: &'static str,
}

impl FeatureSpec {
    /// Whether `value` is finite and within the declared bounds.
    pub fn in_range(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Bounds rendered as `[min, max]` for prompt and error text.
    pub fn range_label(&self) -> String {
        format!("[{}, {}]", self.min, self.max)
    }
}

/// All input features, in the exact order the fitted artifacts expect.
pub static FEATURES: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        name: "daynight_N",
        flag: "daynight",
        label: "Time of Day",
        unit: None,
        min: 0.0,
        max: 1.0,
        default: 0.0,
        log_transformed: false,
        help: "0 = Night, 1 = Day",
    },
    FeatureSpec {
        name: "lat",
        flag: "lat",
        label: "Latitude",
        unit: None,
        min: -90.0,
        max: 90.0,
        default: 0.0,
        log_transformed: false,
        help: "Geographic latitude of the location",
    },
    FeatureSpec {
        name: "lon",
        flag: "lon",
        label: "Longitude",
        unit: None,
        min: -180.0,
        max: 180.0,
        default: 0.0,
        log_transformed: false,
        help: "Geographic longitude of the location",
    },
    FeatureSpec {
        name: "fire_weather_index",
        flag: "fire-weather-index",
        label: "Fire Weather Index",
        unit: None,
        min: 0.0,
        max: 250.0,
        default: 0.0,
        log_transformed: true,
        help: "Combined measure of weather conditions influencing fire hazard",
    },
    FeatureSpec {
        name: "pressure_mean",
        flag: "pressure-mean",
        label: "Mean Atmospheric Pressure",
        unit: Some("hPa"),
        min: 500.0,
        max: 1500.0,
        default: 1013.0,
        log_transformed: false,
        help: "Average air pressure over the hour",
    },
    FeatureSpec {
        name: "wind_direction_mean",
        flag: "wind-direction-mean",
        label: "Wind Direction Mean",
        unit: Some("deg"),
        min: 0.0,
        max: 359.0,
        default: 0.0,
        log_transformed: false,
        help: "Average wind direction in degrees over the hour",
    },
    FeatureSpec {
        name: "wind_direction_std",
        flag: "wind-direction-std",
        label: "Wind Direction Standard Deviation",
        unit: Some("deg"),
        min: 0.0,
        max: 359.0,
        default: 0.0,
        log_transformed: true,
        help: "Variability in wind direction",
    },
    FeatureSpec {
        name: "solar_radiation_mean",
        flag: "solar-radiation-mean",
        label: "Mean Solar Radiation",
        unit: Some("W/m2"),
        min: 0.0,
        max: 500.0,
        default: 0.0,
        log_transformed: true,
        help: "Average sunlight intensity received at ground level",
    },
    FeatureSpec {
        name: "dewpoint_mean",
        flag: "dewpoint-mean",
        label: "Mean Dewpoint Temperature",
        unit: Some("C"),
        min: -60.0,
        max: 35.0,
        default: 0.0,
        log_transformed: false,
        help: "Temperature at which moisture in the air begins to condense",
    },
    FeatureSpec {
        name: "cloud_cover_mean",
        flag: "cloud-cover-mean",
        label: "Mean Cloud Cover",
        unit: Some("%"),
        min: 0.0,
        max: 100.0,
        default: 0.0,
        log_transformed: false,
        help: "Percentage of sky covered by clouds",
    },
    FeatureSpec {
        name: "evapotranspiration_total",
        flag: "evapotranspiration-total",
        label: "Total Evapotranspiration",
        unit: Some("mm"),
        min: 0.0,
        max: 40.0,
        default: 0.0,
        log_transformed: true,
        help: "Total water evaporated from soil and transpired by plants over the hour",
    },
    FeatureSpec {
        name: "humidity_min",
        flag: "humidity-min",
        label: "Minimum Humidity",
        unit: Some("%"),
        min: 0.0,
        max: 100.0,
        default: 0.0,
        log_transformed: true,
        help: "Lowest humidity recorded in the hour",
    },
    FeatureSpec {
        name: "temp_mean",
        flag: "temp-mean",
        label: "Mean Temperature",
        unit: Some("C"),
        min: -50.0,
        max: 50.0,
        default: 0.0,
        log_transformed: false,
        help: "Average temperature over the hour",
    },
    FeatureSpec {
        name: "temp_range",
        flag: "temp-range",
        label: "Temperature Range",
        unit: Some("C"),
        min: 0.0,
        max: 100.0,
        default: 0.0,
        log_transformed: true,
        help: "Difference between the highest and lowest temperature in the hour",
    },
    FeatureSpec {
        name: "wind_speed_max",
        flag: "wind-speed-max",
        label: "Maximum Wind Speed",
        unit: Some("km/h"),
        min: 0.0,
        max: 200.0,
        default: 0.0,
        log_transformed: true,
        help: "Strongest wind gust recorded in the hour",
    },
];

/// One complete set of measurements, in fitted column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    pub daynight_n: f64,
    pub lat: f64,
    pub lon: f64,
    pub fire_weather_index: f64,
    pub pressure_mean: f64,
    pub wind_direction_mean: f64,
    pub wind_direction_std: f64,
    pub solar_radiation_mean: f64,
    pub dewpoint_mean: f64,
    pub cloud_cover_mean: f64,
    pub evapotranspiration_total: f64,
    pub humidity_min: f64,
    pub temp_mean: f64,
    pub temp_range: f64,
    pub wind_speed_max: f64,
}

impl FeatureRecord {
    /// The record as a fixed-order vector, matching [`FEATURES`].
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.daynight_n,
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
        ]
    }
}

/// Accumulates field values from the input-collection layer.
///
/// `build` fails if any field was never supplied; range checks belong to the
/// collection layer (prompts and flag parsing), not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureRecordBuilder {
    pub daynight_n: Option<f64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub fire_weather_index: Option<f64>,
    pub pressure_mean: Option<f64>,
    pub wind_direction_mean: Option<f64>,
    pub wind_direction_std: Option<f64>,
    pub solar_radiation_mean: Option<f64>,
    pub dewpoint_mean: Option<f64>,
    pub cloud_cover_mean: Option<f64>,
    pub evapotranspiration_total: Option<f64>,
    pub humidity_min: Option<f64>,
    pub temp_mean: Option<f64>,
    pub temp_range: Option<f64>,
    pub wind_speed_max: Option<f64>,
}

impl FeatureRecordBuilder {
    /// Current field values, in feature order.
    pub fn values(&self) -> [Option<f64>; FEATURE_COUNT] {
        self.fields()
    }

    /// Set a field by its position in [`FEATURES`].
    pub fn set(&mut self, index: usize, value: f64) {
        match index {
            0 => self.daynight_n = Some(value),
            1 => self.lat = Some(value),
            2 => self.lon = Some(value),
            3 => self.fire_weather_index = Some(value),
            4 => self.pressure_mean = Some(value),
            5 => self.wind_direction_mean = Some(value),
            6 => self.wind_direction_std = Some(value),
            7 => self.solar_radiation_mean = Some(value),
            8 => self.dewpoint_mean = Some(value),
            9 => self.cloud_cover_mean = Some(value),
            10 => self.evapotranspiration_total = Some(value),
            11 => self.humidity_min = Some(value),
            12 => self.temp_mean = Some(value),
            13 => self.temp_range = Some(value),
            14 => self.wind_speed_max = Some(value),
            _ => unreachable!("feature index {} out of range", index),
        }
    }

    fn fields(&self) -> [Option<f64>; FEATURE_COUNT] {
        [
            self.daynight_n,
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
        ]
    }

    /// Which fields are still unset, in feature order.
    pub fn missing(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .zip(FEATURES.iter())
            .filter(|(value, _)| value.is_none())
            .map(|(_, spec)| spec.name)
            .collect()
    }

    /// Finalize the record, failing if any field is missing.
    pub fn build(&self) -> Result<FeatureRecord> {
        let missing = self.missing();
        if !missing.is_empty() {
            bail!("Feature record is incomplete; missing: {}", missing.join(", "));
        }

        let values = self.fields();
        Ok(FeatureRecord {
            daynight_n: values[0].unwrap(),
            lat: values[1].unwrap(),
            lon: values[2].unwrap(),
            fire_weather_index: values[3].unwrap(),
            pressure_mean: values[4].unwrap(),
            wind_direction_mean: values[5].unwrap(),
            wind_direction_std: values[6].unwrap(),
            solar_radiation_mean: values[7].unwrap(),
            dewpoint_mean: values[8].unwrap(),
            cloud_cover_mean: values[9].unwrap(),
            evapotranspiration_total: values[10].unwrap(),
            humidity_min: values[11].unwrap(),
            temp_mean: values[12].unwrap(),
            temp_range: values[13].unwrap(),
            wind_speed_max: values[14].unwrap(),
        })
    }
}
