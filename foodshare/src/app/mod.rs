mod app_error;
mod foodshare_app;

pub use app_error::FoodshareAppError;
pub use foodshare_app::{load_dashboard, FoodshareApp, FoodshareOperation, SummaryOutput};
