use geo::Point;
use geojson::Feature;

use crate::{
    sanitize::{coerce_surplus, non_empty_text},
    util::geo_utils,
};

/// popup title for a restaurant without a usable name.
pub const RESTAURANT_NAME_FALLBACK: &str = "Restaurant";

pub const NAME_PROPERTY: &str = "name";
pub const SURPLUS_PROPERTY: &str = "predicted_surplus";

/// a restaurant with its sanitized predicted surplus.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRecord {
    pub name: Option<String>,
    /// x=longitude, y=latitude
    pub location: Option<Point<f64>>,
    /// always finite, see [`crate::sanitize::SURPLUS_FILL_VALUE`]
    pub predicted_surplus: f64,
}

impl RestaurantRecord {
    pub fn new(name: Option<String>, location: Option<Point<f64>>, predicted_surplus: f64) -> Self {
        Self {
            name,
            location,
            predicted_surplus,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(RESTAURANT_NAME_FALLBACK)
    }
}

impl From<&Feature> for RestaurantRecord {
    fn from(feature: &Feature) -> Self {
        let properties = feature.properties.as_ref();
        let name = properties
            .and_then(|p| p.get(NAME_PROPERTY))
            .and_then(non_empty_text);
        let predicted_surplus = coerce_surplus(properties.and_then(|p| p.get(SURPLUS_PROPERTY)));
        let location = feature
            .geometry
            .as_ref()
            .and_then(|g| geo_utils::representative_point(&g.value));
        Self {
            name,
            location,
            predicted_surplus,
        }
    }
}
