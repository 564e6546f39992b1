use std::{fs::File, io::Read, path::Path};

use geojson::{FeatureCollection, GeoJson};

use super::{
    route_table::{build_header_lookup, DISTANCE_COLUMN},
    DataLoadError, NgoRecord, RestaurantRecord, RouteCoordinateColumns, RouteRecord, RouteTable,
};

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::FileOpenError {
        path: path.display().to_string(),
        source,
    })
}

/// reads a GeoJSON document that must be a FeatureCollection.
///
/// # Arguments
/// * `reader` - source of the GeoJSON text
/// * `source_name` - name used in error messages, usually the file path
pub fn read_feature_collection<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<FeatureCollection, DataLoadError> {
    let geojson = GeoJson::from_reader(reader).map_err(|e| DataLoadError::GeoJsonError {
        path: source_name.to_string(),
        source: e,
    })?;
    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Feature(_) => Err(DataLoadError::NotAFeatureCollection {
            path: source_name.to_string(),
            found: String::from("Feature"),
        }),
        GeoJson::Geometry(_) => Err(DataLoadError::NotAFeatureCollection {
            path: source_name.to_string(),
            found: String::from("Geometry"),
        }),
    }
}

pub fn read_restaurants(path: &Path) -> Result<Vec<RestaurantRecord>, DataLoadError> {
    let fc = read_feature_collection(open(path)?, &path.display().to_string())?;
    let restaurants = fc
        .features
        .iter()
        .map(RestaurantRecord::from)
        .collect::<Vec<_>>();
    let unlocated = restaurants.iter().filter(|r| r.location.is_none()).count();
    log::info!(
        "read {} restaurants from {} ({} without location)",
        restaurants.len(),
        path.display(),
        unlocated
    );
    Ok(restaurants)
}

pub fn read_ngos(path: &Path) -> Result<Vec<NgoRecord>, DataLoadError> {
    let fc = read_feature_collection(open(path)?, &path.display().to_string())?;
    let ngos = fc.features.iter().map(NgoRecord::from).collect::<Vec<_>>();
    let unlocated = ngos.iter().filter(|n| n.location.is_none()).count();
    log::info!(
        "read {} NGOs from {} ({} without location)",
        ngos.len(),
        path.display(),
        unlocated
    );
    Ok(ngos)
}

pub fn read_routes(path: &Path) -> Result<RouteTable, DataLoadError> {
    let routes = read_routes_from_reader(open(path)?, &path.display().to_string())?;
    log::info!("read {} routes from {}", routes.len(), path.display());
    Ok(routes)
}

/// reads the routes CSV. the `distance_km` column is required; the four route
/// coordinate columns are optional and are checked once, against the header.
pub fn read_routes_from_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<RouteTable, DataLoadError> {
    let csv_error = |source: csv::Error| DataLoadError::CsvError {
        path: source_name.to_string(),
        source,
    };
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let header_record = csv_reader.headers().map_err(csv_error)?.clone();
    let headers = header_record
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    let lookup = build_header_lookup(headers.iter().map(String::as_str));
    let distance_column =
        *lookup
            .get(DISTANCE_COLUMN)
            .ok_or_else(|| DataLoadError::MissingColumn {
                path: source_name.to_string(),
                column: DISTANCE_COLUMN.to_string(),
            })?;
    let coordinate_columns = RouteCoordinateColumns::from_header_lookup(&lookup);
    if coordinate_columns.is_none() {
        log::warn!("{source_name} lacks route coordinate columns, route lines will not be drawn");
    }

    let rows = csv_reader
        .records()
        .enumerate()
        .map(|(row_idx, row)| {
            let record = row.map_err(csv_error)?;
            Ok(RouteRecord::new(
                row_idx,
                &record,
                distance_column,
                coordinate_columns.as_ref(),
            ))
        })
        .collect::<Result<Vec<_>, DataLoadError>>()?;

    Ok(RouteTable {
        headers,
        distance_column,
        coordinate_columns,
        rows,
    })
}
