//! Handler for the daily trend series.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::trend::{TrendParams, TrendResponse};
use crate::application::services::{aggregate, since_key};
use crate::error::AppError;
use crate::state::AppState;

/// Returns per-day counts of tools created within the lookback window.
///
/// # Endpoint
///
/// `GET /api/trend`
///
/// # Query Parameters
///
/// - `range` (optional): Lookback in days (default: 90). 90, 30 and 7 carry a label.
///
/// # Response
///
/// Ascending points for days with at least one tool; empty days are omitted.
///
/// # Errors
///
/// Returns 400 Bad Request if `range` is zero or not a number.
/// Returns 502 Bad Gateway if the collection endpoint cannot be read.
pub async fn trend_handler(
    State(state): State<AppState>,
    Query(params): Query<TrendParams>,
) -> Result<Json<TrendResponse>, AppError> {
    let range = params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({ "range": params.range })))?;

    let today = state.clock.today();
    let records = state.source.fetch().await?;
    let series = aggregate(&records, range, today);

    Ok(Json(TrendResponse::new(range, since_key(range, today), series)))
}
