use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for the storage endpoint
///
/// Storage failures answer with status 500 and the raw error message as a
/// plain text body; clients of the storage resource expect text, not a
/// structured error schema.
#[derive(Debug)]
pub enum ApiError {
    /// Request body was not valid JSON
    InvalidJson(serde_json::Error),
    /// Backing file could not be written
    WriteFailed(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::InvalidJson(err) => {
                tracing::error!(error = %err, "Rejecting storage write: invalid JSON body");
                err.to_string()
            }
            ApiError::WriteFailed(err) => {
                tracing::error!(error = %err, "Storage write failed");
                format!("{err:#}")
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::WriteFailed(err)
    }
}
