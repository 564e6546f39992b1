use std::collections::HashMap;

use super::RouteRecord;

pub const DISTANCE_COLUMN: &str = "distance_km";
pub const RESTAURANT_X_COLUMN: &str = "geometry_restaurant_x";
pub const RESTAURANT_Y_COLUMN: &str = "geometry_restaurant_y";
pub const NGO_X_COLUMN: &str = "geometry_ngo_x";
pub const NGO_Y_COLUMN: &str = "geometry_ngo_y";

/// the columns a routes file must carry for route lines to be drawn.
pub const ROUTE_COORDINATE_COLUMNS: [&str; 4] = [
    RESTAURANT_X_COLUMN,
    RESTAURANT_Y_COLUMN,
    NGO_X_COLUMN,
    NGO_Y_COLUMN,
];

/// header positions of the four route coordinate columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteCoordinateColumns {
    pub restaurant_x: usize,
    pub restaurant_y: usize,
    pub ngo_x: usize,
    pub ngo_y: usize,
}

impl RouteCoordinateColumns {
    /// schema capability check. returns None unless every column in
    /// [`ROUTE_COORDINATE_COLUMNS`] is present in the header lookup.
    pub fn from_header_lookup(headers: &HashMap<String, usize>) -> Option<RouteCoordinateColumns> {
        Some(RouteCoordinateColumns {
            restaurant_x: *headers.get(RESTAURANT_X_COLUMN)?,
            restaurant_y: *headers.get(RESTAURANT_Y_COLUMN)?,
            ngo_x: *headers.get(NGO_X_COLUMN)?,
            ngo_y: *headers.get(NGO_Y_COLUMN)?,
        })
    }
}

/// the routes dataset: its schema and its rows in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    pub headers: Vec<String>,
    pub distance_column: usize,
    pub coordinate_columns: Option<RouteCoordinateColumns>,
    pub rows: Vec<RouteRecord>,
}

impl RouteTable {
    /// true when the schema carries every route coordinate column.
    pub fn has_route_geometry(&self) -> bool {
        self.coordinate_columns.is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// maps header names to column indices. the first occurrence of a duplicated name wins.
pub fn build_header_lookup<'a, I>(headers: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lookup = HashMap::new();
    for (idx, name) in headers.into_iter().enumerate() {
        lookup.entry(name.trim().to_string()).or_insert(idx);
    }
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_columns_require_all_four() {
        let full = build_header_lookup([
            "restaurant_id",
            "geometry_restaurant_x",
            "geometry_restaurant_y",
            "geometry_ngo_x",
            "geometry_ngo_y",
            "distance_km",
        ]);
        assert_eq!(
            RouteCoordinateColumns::from_header_lookup(&full),
            Some(RouteCoordinateColumns {
                restaurant_x: 1,
                restaurant_y: 2,
                ngo_x: 3,
                ngo_y: 4
            })
        );

        for missing in ROUTE_COORDINATE_COLUMNS.iter() {
            let partial = build_header_lookup(
                ROUTE_COORDINATE_COLUMNS
                    .iter()
                    .copied()
                    .filter(|c| c != missing)
                    .chain([DISTANCE_COLUMN]),
            );
            assert!(
                RouteCoordinateColumns::from_header_lookup(&partial).is_none(),
                "gate should fail without {missing}"
            );
        }
    }
}
