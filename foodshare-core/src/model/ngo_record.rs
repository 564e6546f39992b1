use geo::Point;
use geojson::Feature;

use crate::{
    sanitize::{derive_ngo_label, NgoLabelSource},
    util::geo_utils,
};

/// an NGO location with its display label, derived once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct NgoRecord {
    pub label: String,
    pub label_source: NgoLabelSource,
    /// x=longitude, y=latitude
    pub location: Option<Point<f64>>,
}

impl From<&Feature> for NgoRecord {
    fn from(feature: &Feature) -> Self {
        let (label, label_source) = derive_ngo_label(feature.properties.as_ref());
        let location = feature
            .geometry
            .as_ref()
            .and_then(|g| geo_utils::representative_point(&g.value));
        Self {
            label,
            label_source,
            location,
        }
    }
}
