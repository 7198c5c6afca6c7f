//! API route configuration.

use crate::api::handlers::{tools_handler, trend_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /tools` - One page of the tool collection
/// - `GET /trend` - Per-day creation counts over a lookback window
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/tools", get(tools_handler))
        .route("/trend", get(trend_handler))
}
