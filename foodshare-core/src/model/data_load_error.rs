use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("failure opening {path}: {source}")]
    FileOpenError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure reading GeoJSON from {path}: {source}")]
    GeoJsonError {
        path: String,
        source: serde_json::Error,
    },
    #[error("expected a GeoJSON FeatureCollection in {path}, found a {found}")]
    NotAFeatureCollection { path: String, found: String },
    #[error("failure reading CSV from {path}: {source}")]
    CsvError { path: String, source: csv::Error },
    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },
}
