use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// locations of the three precomputed input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// GeoJSON FeatureCollection of restaurants with a `predicted_surplus` property
    pub restaurants_file: PathBuf,
    /// GeoJSON FeatureCollection of clustered NGOs
    pub ngos_file: PathBuf,
    /// CSV of optimized donation routes with a `distance_km` column
    pub routes_file: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            restaurants_file: PathBuf::from("data/restaurants_with_surplus.geojson"),
            ngos_file: PathBuf::from("data/ngos_clustered.geojson"),
            routes_file: PathBuf::from("data/optimized_donation_routes.csv"),
        }
    }
}
