use foodshare_core::model::DataLoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodshareAppError {
    #[error("failure reading dashboard configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading dashboard data: {source}")]
    DataLoadError {
        #[from]
        source: DataLoadError,
    },
    #[error("i/o failure: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("dashboard server failed: {0}")]
    ServerError(String),
}

impl From<config::ConfigError> for FoodshareAppError {
    fn from(value: config::ConfigError) -> Self {
        FoodshareAppError::ConfigurationError(value.to_string())
    }
}
