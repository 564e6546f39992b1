use serde::{Deserialize, Serialize};

use crate::model::{NgoRecord, RestaurantRecord, RouteTable};

/// the three metrics shown above the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// restaurants passing the current surplus threshold
    pub high_surplus_restaurants: usize,
    /// every NGO record, the surplus threshold does not apply
    pub ngos_covered: usize,
    /// mean route distance rounded to two decimals, 0 when there is nothing to average
    pub avg_route_distance_km: f64,
}

impl DashboardSummary {
    pub fn new(
        filtered_restaurants: &[&RestaurantRecord],
        ngos: &[NgoRecord],
        routes: &RouteTable,
    ) -> DashboardSummary {
        DashboardSummary {
            high_surplus_restaurants: filtered_restaurants.len(),
            ngos_covered: ngos.len(),
            avg_route_distance_km: round_to(mean_distance_km(routes).unwrap_or(0.0), 2),
        }
    }
}

/// mean of the present route distances. None when there are no rows, or no
/// row has a numeric distance.
pub fn mean_distance_km(routes: &RouteTable) -> Option<f64> {
    let (sum, count) = routes
        .rows
        .iter()
        .filter_map(|r| r.distance_km)
        .fold((0.0, 0usize), |(sum, count), d| (sum + d, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// rounds half away from zero to a number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::load_ops::read_routes_from_reader;
    use crate::sanitize::NgoLabelSource;

    fn ngos(n: usize) -> Vec<NgoRecord> {
        (0..n)
            .map(|i| NgoRecord {
                label: format!("ngo {i}"),
                label_source: NgoLabelSource::Name,
                location: None,
            })
            .collect()
    }

    #[test]
    fn test_average_distance_rounded() {
        let routes = read_routes_from_reader(
            "distance_km\n1.0\n2.0\nbad\n2.0\n".as_bytes(),
            "routes.csv",
        )
        .unwrap();
        // missing values do not count as zero: (1 + 2 + 2) / 3
        assert_eq!(mean_distance_km(&routes).map(|m| round_to(m, 2)), Some(1.67));
        let summary = DashboardSummary::new(&[], &ngos(4), &routes);
        assert_eq!(summary.avg_route_distance_km, 1.67);
        assert_eq!(summary.ngos_covered, 4);
        assert_eq!(summary.high_surplus_restaurants, 0);
    }

    #[test]
    fn test_empty_routes_average_zero() {
        let routes = read_routes_from_reader("distance_km\n".as_bytes(), "routes.csv").unwrap();
        assert!(routes.is_empty());
        let summary = DashboardSummary::new(&[], &[], &routes);
        assert_eq!(summary.avg_route_distance_km, 0.0);
        assert!(!summary.avg_route_distance_km.is_nan());
    }

    #[test]
    fn test_all_missing_distances_average_zero() {
        let routes =
            read_routes_from_reader("distance_km\n\nn/a\n".as_bytes(), "routes.csv").unwrap();
        assert_eq!(mean_distance_km(&routes), None);
        let summary = DashboardSummary::new(&[], &[], &routes);
        assert_eq!(summary.avg_route_distance_km, 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.345678, 2), 2.35);
        assert_eq!(round_to(-1.005, 0), -1.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
