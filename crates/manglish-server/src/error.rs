//! HTTP error mapping
//!
//! Every failure leaves the handler as a JSON body with an `error` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use manglish_model::SlidesError;
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            upstream_status: None,
        }
    }
}

/// API error
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    BadGateway { message: String, upstream_status: u16 },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::BadGateway {
                message,
                upstream_status,
            } => {
                tracing::error!(upstream_status, error = %message, "Upstream fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: message,
                        upstream_status: Some(upstream_status),
                    },
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<SlidesError> for ApiError {
    fn from(e: SlidesError) -> Self {
        if e.is_validation() {
            return ApiError::BadRequest(e.to_string());
        }
        match &e {
            SlidesError::UpstreamStatus { status, .. } => ApiError::BadGateway {
                message: e.to_string(),
                upstream_status: *status,
            },
            _ => ApiError::Internal(e.to_string()),
        }
    }
}
