//! Service-level endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::models::HikeStats;
use crate::server::error::ApiError;
use crate::server::AppState;

/// Service descriptor listing the available routes.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Summit Hikes API",
        "endpoints": {
            "/hikes": "List hikes with filtering, sorting and pagination",
            "/hikes/{id}": "Get one hike with peaks, trailheads and climbing seasons",
            "/stats": "Dataset statistics",
        }
    }))
}

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Statistics over the whole dataset. Ignores filters.
pub async fn stats(State(state): State<AppState>) -> Result<Json<HikeStats>, ApiError> {
    Ok(Json(state.hikes.stats().await?))
}
