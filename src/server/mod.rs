//! Read-only JSON API over the imported hikes.
//!
//! Routes:
//! - `GET /` service descriptor
//! - `GET /hikes` filtered, sorted, paginated list
//! - `GET /hikes/:id` one hike with peaks, trailheads and seasons
//! - `GET /stats` dataset statistics
//! - `GET /health` liveness probe

mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use handlers::HikeListParams;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::QueryService;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub hikes: Arc<QueryService>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self::from_service(settings.query_service())
    }

    pub fn from_service(service: QueryService) -> Self {
        Self {
            hikes: Arc::new(service),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
