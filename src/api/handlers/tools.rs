//! Handler for the paginated tool table.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::tools::ToolsPageResponse;
use crate::application::services::paginate;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one page of the tool collection.
///
/// # Endpoint
///
/// `GET /api/tools`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page, one of 10/20/30/40/50 (default: 10)
///
/// # Response
///
/// Rows in source order with pagination metadata. `total_pages` is at least 1
/// even for an empty collection; a page past the end returns no items.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
/// Returns 502 Bad Gateway if the collection endpoint cannot be read.
pub async fn tools_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ToolsPageResponse>, AppError> {
    let (page, page_size) = params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let records = state.source.fetch().await?;
    let view = paginate(&records, page, page_size);

    Ok(Json(ToolsPageResponse::from(&view)))
}
