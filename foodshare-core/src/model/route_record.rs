use csv::StringRecord;
use geo::Point;

use crate::sanitize::{coerce_distance, parse_numeric_str};

use super::RouteCoordinateColumns;

/// straight segment from a restaurant to the NGO it donates to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSegment {
    /// x=longitude, y=latitude
    pub restaurant: Point<f64>,
    /// x=longitude, y=latitude
    pub ngo: Point<f64>,
}

/// a row of the optimized donation routes file.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    /// raw cell text in header order
    pub fields: Vec<String>,
    /// coerced distance, absent when the cell is not numeric
    pub distance_km: Option<f64>,
    /// present only when the file has all coordinate columns and they parse on this row
    pub segment: Option<RouteSegment>,
}

impl RouteRecord {
    pub fn new(
        row_idx: usize,
        record: &StringRecord,
        distance_column: usize,
        coordinate_columns: Option<&RouteCoordinateColumns>,
    ) -> RouteRecord {
        let fields = record.iter().map(String::from).collect::<Vec<_>>();
        let distance_km = coerce_distance(record.get(distance_column).unwrap_or_default());
        if distance_km.is_none() {
            log::debug!("route row {row_idx} has no numeric distance_km");
        }
        let segment = coordinate_columns.and_then(|cols| {
            let segment = cols.read_segment(record);
            if segment.is_none() {
                log::debug!("route row {row_idx} has unreadable coordinates, not drawn");
            }
            segment
        });
        RouteRecord {
            fields,
            distance_km,
            segment,
        }
    }
}

impl RouteCoordinateColumns {
    /// reads the restaurant and NGO coordinates of a row. cells are (x=longitude, y=latitude).
    pub fn read_segment(&self, record: &StringRecord) -> Option<RouteSegment> {
        let read = |idx: usize| record.get(idx).and_then(parse_numeric_str);
        let restaurant = Point::new(read(self.restaurant_x)?, read(self.restaurant_y)?);
        let ngo = Point::new(read(self.ngo_x)?, read(self.ngo_y)?);
        Some(RouteSegment { restaurant, ngo })
    }
}
