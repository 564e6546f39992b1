mod dashboard;
mod map_layers;
mod map_settings;
mod route_table_view;
mod summary;
mod surplus_filter;

pub use dashboard::{Dashboard, DashboardSettings, DashboardView};
pub use map_layers::{
    ngo_layer, restaurant_layer, route_layer, CircleMarker, MapView, PinMarker, RouteLine,
};
pub use map_settings::{BaseMapStyle, MapSettings};
pub use route_table_view::{compare_distance, shortest_routes, RouteTableView, DEFAULT_TABLE_ROWS};
pub use summary::{mean_distance_km, round_to, DashboardSummary};
pub use surplus_filter::{filter_restaurants, quantile, SurplusFilter, DEFAULT_THRESHOLD_QUANTILE};
