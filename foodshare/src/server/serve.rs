use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{app::FoodshareAppError, config::ServerConfig};

use super::{build_router, ServerState};

/// binds the dashboard server and runs it until ctrl-c.
pub async fn serve(state: Arc<ServerState>, conf: &ServerConfig) -> Result<(), FoodshareAppError> {
    let address = format!("{}:{}", conf.host, conf.port);
    let listener = TcpListener::bind(&address).await?;
    log::info!("serving foodshare dashboard at http://{address}/");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FoodshareAppError::ServerError(e.to_string()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("shutting down foodshare dashboard"),
        Err(e) => log::error!("failure listening for shutdown signal: {e}"),
    }
}
