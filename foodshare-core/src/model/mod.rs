mod data_load_error;
mod data_sources;
mod donation_dataset;
pub mod load_ops;
mod ngo_record;
mod restaurant_record;
mod route_record;
pub mod route_table;

pub use data_load_error::DataLoadError;
pub use data_sources::DataSources;
pub use donation_dataset::DonationDataset;
pub use ngo_record::NgoRecord;
pub use restaurant_record::{RestaurantRecord, RESTAURANT_NAME_FALLBACK};
pub use route_record::{RouteRecord, RouteSegment};
pub use route_table::{RouteCoordinateColumns, RouteTable};
