use geo::{Centroid, Geometry, Point};
use geojson::{Position, Value};

/// finds the map location of a GeoJSON geometry using the assumptions that
/// - points are located at their own coordinate
/// - other geometry types are located at their centroid
///
/// since a centroid may not exist (for example, empty geometries), and since
/// positions may be malformed (fewer than two ordinates, non-finite values),
/// the result may be None
///
/// # Arguments
///
/// * `value` - GeoJSON geometry value of a feature
///
/// # Returns
///
/// * a point in (x=longitude, y=latitude) order if possible, otherwise None
pub fn representative_point(value: &Value) -> Option<Point<f64>> {
    if !has_valid_positions(value) {
        return None;
    }
    match value {
        Value::Point(position) => Some(Point::new(position[0], position[1])),
        other => {
            let geometry = Geometry::<f64>::try_from(other.clone()).ok()?;
            geometry.centroid()
        }
    }
}

fn has_valid_positions(value: &Value) -> bool {
    match value {
        Value::Point(p) => valid_position(p),
        Value::MultiPoint(ps) | Value::LineString(ps) => ps.iter().all(valid_position),
        Value::MultiLineString(ls) | Value::Polygon(ls) => ls.iter().flatten().all(valid_position),
        Value::MultiPolygon(polys) => polys.iter().flatten().flatten().all(valid_position),
        Value::GeometryCollection(gs) => gs.iter().all(|g| has_valid_positions(&g.value)),
    }
}

fn valid_position(position: &Position) -> bool {
    position.len() >= 2 && position[0].is_finite() && position[1].is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_location() {
        let value = Value::Point(vec![73.8567, 18.5204]);
        let point = representative_point(&value).unwrap();
        assert_eq!(point.x(), 73.8567);
        assert_eq!(point.y(), 18.5204);
    }

    #[test]
    fn test_polygon_located_at_centroid() {
        let value = Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![2.0, 0.0],
            vec![2.0, 2.0],
            vec![0.0, 2.0],
            vec![0.0, 0.0],
        ]]);
        let point = representative_point(&value).unwrap();
        assert!((point.x() - 1.0).abs() < 1e-9);
        assert!((point.y() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_or_empty_geometry_has_no_location() {
        assert!(representative_point(&Value::Point(vec![73.8])).is_none());
        assert!(representative_point(&Value::Point(vec![f64::NAN, 18.5])).is_none());
        assert!(representative_point(&Value::MultiPoint(vec![])).is_none());
    }
}
