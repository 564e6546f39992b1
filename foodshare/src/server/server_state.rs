use foodshare_core::view::Dashboard;

use crate::config::ViewConfig;

/// shared state backing the HTTP handlers. built once before the listener
/// binds and only read afterwards.
pub struct ServerState {
    pub dashboard: Dashboard,
    pub page: ViewConfig,
}

impl ServerState {
    pub fn new(dashboard: Dashboard, page: ViewConfig) -> ServerState {
        ServerState { dashboard, page }
    }
}
