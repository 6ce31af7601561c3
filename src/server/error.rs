//! Error responses for the JSON API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::repository::DieselError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter failed validation.
    #[error("{name}: {message}")]
    InvalidParameter { name: &'static str, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] DieselError),
}

impl ApiError {
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidParameter { name, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "detail": message, "parameter": name }),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "detail": message }),
            ),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "detail": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
