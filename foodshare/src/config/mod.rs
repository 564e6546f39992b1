mod foodshare_config;

pub use foodshare_config::{FoodshareConfig, ServerConfig, ViewConfig, ENV_PREFIX, ENV_SEPARATOR};
