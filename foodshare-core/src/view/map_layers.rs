use serde::{Deserialize, Serialize};

use crate::{
    model::{NgoRecord, RestaurantRecord, RouteTable},
    util::html::escape_html,
};

use super::MapSettings;

pub const RESTAURANT_MARKER_RADIUS: f64 = 5.0;
pub const RESTAURANT_MARKER_COLOR: &str = "red";
pub const RESTAURANT_MARKER_FILL_OPACITY: f64 = 0.7;
pub const NGO_MARKER_COLOR: &str = "blue";
pub const NGO_MARKER_ICON: &str = "home";
pub const ROUTE_LINE_COLOR: &str = "green";
pub const ROUTE_LINE_WEIGHT: f64 = 2.0;
pub const ROUTE_LINE_OPACITY: f64 = 0.6;

/// small filled circle marking a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub color: String,
    pub fill: bool,
    pub fill_opacity: f64,
    /// popup content, HTML
    pub popup: String,
}

impl CircleMarker {
    /// None when the restaurant has no location.
    pub fn from_restaurant(restaurant: &RestaurantRecord) -> Option<CircleMarker> {
        let location = restaurant.location?;
        let popup = format!(
            "<b>{}</b><br>Predicted Surplus: {:.2}",
            escape_html(restaurant.display_name()),
            restaurant.predicted_surplus
        );
        Some(CircleMarker {
            lat: location.y(),
            lon: location.x(),
            radius: RESTAURANT_MARKER_RADIUS,
            color: String::from(RESTAURANT_MARKER_COLOR),
            fill: true,
            fill_opacity: RESTAURANT_MARKER_FILL_OPACITY,
            popup,
        })
    }
}

/// pin marker for an NGO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinMarker {
    pub lat: f64,
    pub lon: f64,
    pub color: String,
    pub icon: String,
    /// popup content, HTML
    pub popup: String,
}

impl PinMarker {
    /// None when the NGO has no location.
    pub fn from_ngo(ngo: &NgoRecord) -> Option<PinMarker> {
        let location = ngo.location?;
        Some(PinMarker {
            lat: location.y(),
            lon: location.x(),
            color: String::from(NGO_MARKER_COLOR),
            icon: String::from(NGO_MARKER_ICON),
            popup: escape_html(&ngo.label),
        })
    }
}

/// two-point line from a restaurant to an NGO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLine {
    /// `[[lat, lon] restaurant, [lat, lon] ngo]`
    pub points: [[f64; 2]; 2],
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

/// the donation map: base layer settings and the three overlay layers in draw
/// order (restaurants, NGOs, routes). each layer keeps its source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tiles_url: String,
    pub tiles_attribution: String,
    pub width: u32,
    pub height: u32,
    pub restaurants: Vec<CircleMarker>,
    pub ngos: Vec<PinMarker>,
    pub routes: Vec<RouteLine>,
}

impl MapView {
    pub fn new(
        settings: &MapSettings,
        filtered_restaurants: &[&RestaurantRecord],
        ngos: &[NgoRecord],
        routes: &RouteTable,
    ) -> MapView {
        MapView {
            center: settings.center,
            zoom: settings.zoom,
            tiles_url: settings.tiles.tile_url().to_string(),
            tiles_attribution: settings.tiles.attribution().to_string(),
            width: settings.width,
            height: settings.height,
            restaurants: restaurant_layer(filtered_restaurants),
            ngos: ngo_layer(ngos),
            routes: route_layer(routes),
        }
    }
}

pub fn restaurant_layer(restaurants: &[&RestaurantRecord]) -> Vec<CircleMarker> {
    restaurants
        .iter()
        .filter_map(|r| CircleMarker::from_restaurant(r))
        .collect()
}

pub fn ngo_layer(ngos: &[NgoRecord]) -> Vec<PinMarker> {
    ngos.iter().filter_map(PinMarker::from_ngo).collect()
}

/// route lines for every row with readable coordinates, regardless of its distance.
/// empty unless the routes schema carries all four coordinate columns.
pub fn route_layer(routes: &RouteTable) -> Vec<RouteLine> {
    if !routes.has_route_geometry() {
        return vec![];
    }
    routes
        .rows
        .iter()
        .filter_map(|row| row.segment)
        .map(|segment| RouteLine {
            points: [
                [segment.restaurant.y(), segment.restaurant.x()],
                [segment.ngo.y(), segment.ngo.x()],
            ],
            color: String::from(ROUTE_LINE_COLOR),
            weight: ROUTE_LINE_WEIGHT,
            opacity: ROUTE_LINE_OPACITY,
        })
        .collect()
}
