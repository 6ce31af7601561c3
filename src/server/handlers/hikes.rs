//! Hike list and detail handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;

use super::params::HikeListParams;
use crate::models::{HikeDetail, HikeListItem};
use crate::server::error::ApiError;
use crate::server::AppState;

/// `GET /hikes`: filtered, sorted, paginated list.
pub async fn list_hikes(
    State(state): State<AppState>,
    Query(params): Query<HikeListParams>,
) -> Result<Json<Vec<HikeListItem>>, ApiError> {
    let query = params.into_query()?;
    let today = Local::now().date_naive();
    let hikes = state.hikes.list_hikes(&query, today).await?;
    Ok(Json(hikes))
}

/// `GET /hikes/:id`: one hike with its peaks, trailheads and seasons.
pub async fn hike_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<HikeDetail>, ApiError> {
    let today = Local::now().date_naive();
    state
        .hikes
        .get_hike(id, today)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Hike not found".to_string()))
}
