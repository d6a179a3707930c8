//! API error type and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the HTTP boundary.
///
/// Upstream failures stay visible to the caller; they are never swallowed or
/// converted into an empty success.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UpstreamFailure(String),

    #[error("{0}")]
    Internal(String),
}

impl From<quotegate_core::Error> for ApiError {
    fn from(err: quotegate_core::Error) -> Self {
        match err {
            quotegate_core::Error::Validation(message) => ApiError::BadRequest(message),
            quotegate_core::Error::MarketData(source) => {
                ApiError::UpstreamFailure(source.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::UpstreamFailure(message) => {
                tracing::error!("Upstream failure: {}", message);
                (StatusCode::BAD_GATEWAY, message)
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
