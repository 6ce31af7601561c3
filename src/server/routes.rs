//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Hikes
        .route("/hikes", get(handlers::list_hikes))
        .route("/hikes/:id", get(handlers::hike_detail))
        .route("/stats", get(handlers::stats))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
