use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use foodshare_core::sanitize::parse_numeric_str;
use serde::Deserialize;

use crate::page::{self, PageMode};

use super::ServerState;

/// query string of the page and view endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ThresholdQuery {
    /// kept as text so an unreadable value falls back to the default threshold
    /// instead of rejecting the request
    pub min_surplus: Option<String>,
}

impl ThresholdQuery {
    pub fn threshold(&self) -> Option<f64> {
        let raw = self.min_surplus.as_deref()?;
        let parsed = parse_numeric_str(raw);
        if parsed.is_none() {
            log::debug!("ignoring unreadable min_surplus '{raw}'");
        }
        parsed
    }
}

/// builds the dashboard router
pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index_route))
        .route("/api/view", get(view_route))
        .route("/health", get(health_route))
        .with_state(state)
}

async fn index_route(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ThresholdQuery>,
) -> Response {
    let view = state.dashboard.view(query.threshold());
    match page::render_page(&view, &state.page, PageMode::Live) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("failure rendering dashboard page: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn view_route(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ThresholdQuery>,
) -> impl IntoResponse {
    Json(state.dashboard.view(query.threshold()))
}

async fn health_route() -> &'static str {
    "ok"
}
