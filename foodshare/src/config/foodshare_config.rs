use std::path::Path;

use config::{Config, Environment, FileFormat};
use foodshare_core::{
    model::DataSources,
    view::{DashboardSettings, MapSettings, DEFAULT_TABLE_ROWS, DEFAULT_THRESHOLD_QUANTILE},
};
use serde::{Deserialize, Serialize};

use crate::app::FoodshareAppError;

/// prefix of environment variables overriding configuration values,
/// e.g. `FOODSHARE__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "FOODSHARE";
pub const ENV_SEPARATOR: &str = "__";

/// defines the data sources, map, page and server of a dashboard run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(default)]
pub struct FoodshareConfig {
    pub data: DataSources,
    pub map: MapSettings,
    pub view: ViewConfig,
    pub server: ServerConfig,
}

/// page text and view parameters
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub default_quantile: f64,
    pub table_rows: usize,
    pub title: String,
    pub description: String,
    pub footer: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_quantile: DEFAULT_THRESHOLD_QUANTILE,
            table_rows: DEFAULT_TABLE_ROWS,
            title: String::from("Pune Food Waste Prediction & Donation Routing"),
            description: String::from(
                "An AI-powered system to predict food surplus and optimize NGO donation routes in Pune.",
            ),
            footer: String::from("Data Science • GeoSpatial • AI Routing"),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8501,
        }
    }
}

impl FoodshareConfig {
    /// builds the configuration from defaults, then the optional file, then
    /// `FOODSHARE__*` environment variables, and validates the result.
    pub fn load(config_file: Option<&Path>) -> Result<FoodshareConfig, FoodshareAppError> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&FoodshareConfig::default())?);
        if let Some(f) = config_file {
            log::info!("reading foodshare configuration from {}", f.display());
            let format = file_format(f)?;
            builder = builder.add_source(config::File::from(f).format(format).required(true));
        }
        let conf: FoodshareConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), FoodshareAppError> {
        let q = self.view.default_quantile;
        if !(0.0..=1.0).contains(&q) {
            return Err(FoodshareAppError::ConfigurationError(format!(
                "view.default_quantile must be in [0, 1], found {q}"
            )));
        }
        if self.view.table_rows == 0 {
            return Err(FoodshareAppError::ConfigurationError(String::from(
                "view.table_rows must be positive",
            )));
        }
        if self.map.zoom > 20 {
            return Err(FoodshareAppError::ConfigurationError(format!(
                "map.zoom must be in [0, 20], found {}",
                self.map.zoom
            )));
        }
        let [lat, lon] = self.map.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(FoodshareAppError::ConfigurationError(format!(
                "map.center must be [latitude, longitude], found [{lat}, {lon}]"
            )));
        }
        Ok(())
    }

    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            map: self.map.clone(),
            default_quantile: self.view.default_quantile,
            table_rows: self.view.table_rows,
        }
    }
}

fn file_format(f: &Path) -> Result<FileFormat, FoodshareAppError> {
    match f.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(FoodshareAppError::ConfigurationError(format!(
            "unsupported file type: {}",
            f.display()
        ))),
    }
}
