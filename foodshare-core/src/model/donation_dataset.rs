use super::{load_ops, DataLoadError, DataSources, NgoRecord, RestaurantRecord, RouteTable};

/// the three sanitized input datasets. built once per session and never mutated,
/// every view of the dashboard is derived from a shared reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationDataset {
    pub restaurants: Vec<RestaurantRecord>,
    pub ngos: Vec<NgoRecord>,
    pub routes: RouteTable,
}

impl DonationDataset {
    pub fn new(
        restaurants: Vec<RestaurantRecord>,
        ngos: Vec<NgoRecord>,
        routes: RouteTable,
    ) -> DonationDataset {
        DonationDataset {
            restaurants,
            ngos,
            routes,
        }
    }

    /// loads and sanitizes all three inputs. fails on the first file that is
    /// missing or malformed; there is no partial load.
    pub fn load(sources: &DataSources) -> Result<DonationDataset, DataLoadError> {
        let restaurants = load_ops::read_restaurants(&sources.restaurants_file)?;
        let ngos = load_ops::read_ngos(&sources.ngos_file)?;
        let routes = load_ops::read_routes(&sources.routes_file)?;
        Ok(DonationDataset::new(restaurants, ngos, routes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::{NgoLabelSource, SURPLUS_FILL_VALUE};
    use std::{fs, path::Path};

    const RESTAURANTS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [73.841, 18.521]},
             "properties": {"name": "Vaishali", "predicted_surplus": 12.5}},
            {"type": "Feature", "geometry": null,
             "properties": {"name": "Roopali", "predicted_surplus": "7.25"}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [73.85, 18.53]},
             "properties": {"predicted_surplus": "unknown"}}
        ]
    }"#;

    const NGOS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [73.856, 18.530]},
             "properties": {"ngo_name": "", "name": "Helping Hands", "cluster": 0}},
            {"type": "Feature", "geometry": null, "properties": {"cluster": 1}}
        ]
    }"#;

    const ROUTES: &str = "restaurant,ngo,distance_km\nVaishali,Helping Hands,2.4\n";

    fn write_sources(dir: &Path) -> DataSources {
        let sources = DataSources {
            restaurants_file: dir.join("restaurants_with_surplus.geojson"),
            ngos_file: dir.join("ngos_clustered.geojson"),
            routes_file: dir.join("optimized_donation_routes.csv"),
        };
        fs::write(&sources.restaurants_file, RESTAURANTS).unwrap();
        fs::write(&sources.ngos_file, NGOS).unwrap();
        fs::write(&sources.routes_file, ROUTES).unwrap();
        sources
    }

    #[test]
    fn test_load_sanitizes_all_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let sources = write_sources(dir.path());
        let dataset = DonationDataset::load(&sources).unwrap();

        assert_eq!(dataset.restaurants.len(), 3);
        assert_eq!(dataset.restaurants[0].predicted_surplus, 12.5);
        assert_eq!(dataset.restaurants[1].predicted_surplus, 7.25);
        assert!(dataset.restaurants[1].location.is_none());
        assert_eq!(dataset.restaurants[2].predicted_surplus, SURPLUS_FILL_VALUE);
        assert_eq!(dataset.restaurants[2].display_name(), "Restaurant");

        assert_eq!(dataset.ngos.len(), 2);
        assert_eq!(dataset.ngos[0].label, "Helping Hands");
        assert_eq!(dataset.ngos[1].label, "NGO");
        assert_eq!(dataset.ngos[1].label_source, NgoLabelSource::Fallback);

        assert_eq!(dataset.routes.len(), 1);
        assert!(!dataset.routes.has_route_geometry());
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let mut sources = write_sources(dir.path());
        sources.ngos_file = dir.path().join("does_not_exist.geojson");
        let result = DonationDataset::load(&sources);
        assert!(matches!(result, Err(DataLoadError::FileOpenError { .. })));
    }
}
