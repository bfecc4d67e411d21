//! Domain-specific error types for steady-mind

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the steady-mind service
#[derive(Error, Debug)]
pub enum SteadyMindError {
    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Timeout error: {operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for SteadyMindError {
    fn from(err: anyhow::Error) -> Self {
        SteadyMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SteadyMindError {
    fn from(err: serde_json::Error) -> Self {
        SteadyMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SteadyMindError {
    fn from(err: reqwest::Error) -> Self {
        SteadyMindError::Provider {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

/// Convert SteadyMindError to an HTTP response
///
/// The body is the flat `{"error": "..."}` shape clients key on.
impl IntoResponse for SteadyMindError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SteadyMindError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            SteadyMindError::Timeout {
                operation,
                timeout_ms,
            } => (
                StatusCode::GATEWAY_TIMEOUT,
                format!("{operation} timed out after {timeout_ms}ms"),
            ),
            SteadyMindError::Provider { message } => (StatusCode::BAD_GATEWAY, message),
            SteadyMindError::Serialization { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            SteadyMindError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            json!({ "error": message }).to_string(),
        )
            .into_response()
    }
}

/// Result type alias for steady-mind operations
pub type Result<T> = std::result::Result<T, SteadyMindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = SteadyMindError::Validation {
            message: "Valid text input is required".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_maps_to_bad_gateway() {
        let response = SteadyMindError::Provider {
            message: "upstream refused".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
