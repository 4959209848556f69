use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The directions lookup produced no usable route. Carries the upstream
    /// status so callers can tell `ZERO_RESULTS` from `REQUEST_DENIED`.
    #[error("Route unavailable: {0}")]
    RouteUnavailable(String),

    #[error("Upstream lookup failed: {0}")]
    UpstreamLookup(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::RouteUnavailable(ref e) => {
                tracing::warn!("Route unavailable: {}", e);
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::UpstreamLookup(ref e) => {
                tracing::error!("Upstream lookup failed: {}", e);
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
