//! Error types for the LexDraft API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_types::ApiEnvelope;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/invalid bearer token, or the upstream rejected it
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// Upstream answered with an unexpected non-2xx status
    #[error("Upstream error (status {status})")]
    Upstream { status: u16 },

    /// Upstream could not be reached at all
    #[error("Upstream unreachable: {0}")]
    Gateway(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Upstream { status } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Upstream error (status {})", status),
            ),
            ApiError::Gateway(e) => {
                tracing::error!("Upstream unreachable: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream unreachable".to_string())
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(ApiEnvelope::<()>::err(message));
        (status, body).into_response()
    }
}
