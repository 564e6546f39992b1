mod routes;
mod serve;
mod server_state;

pub use routes::{build_router, ThresholdQuery};
pub use serve::serve;
pub use server_state::ServerState;
