// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! This module provides the server error type and its HTTP response mapping.
//! Tool failures keep their `{error_kind, message}` body and get a status code
//! derived from the kind; everything else is reported as `{error, status}`.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared_types::{ErrorKind, ToolError};
use thiserror::Error;

/// Comprehensive error types for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Network binding errors
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        /// Socket address that failed to bind
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("Server startup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("Server shutdown failed: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// JSON parsing errors with detailed context
    #[error("Invalid JSON request: {message}")]
    JsonError {
        /// Detailed error message
        message: String,
    },

    /// A classified failure of a tool call
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// HTTP status reported for a tool failure of the given kind
pub fn status_for_kind(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorKind::UpstreamError | ErrorKind::BadUpstreamResponse => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Tool(tool_error) => {
                return (status_for_kind(tool_error.error_kind), Json(tool_error)).into_response();
            }
            ServerError::JsonError { .. } => StatusCode::BAD_REQUEST,
            ServerError::Config { .. }
            | ServerError::Bind { .. }
            | ServerError::Startup { .. }
            | ServerError::Shutdown { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn kind_status_mapping() {
        assert_eq!(
            status_for_kind(ErrorKind::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for_kind(ErrorKind::BadRequest),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for_kind(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for_kind(ErrorKind::Timeout),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_for_kind(ErrorKind::UpstreamError),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for_kind(ErrorKind::BadUpstreamResponse),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn tool_error_keeps_structured_body() {
        let response =
            ServerError::from(ToolError::not_found("no nutrition data found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "error_kind": "not_found",
                "message": "no nutrition data found"
            })
        );
    }

    #[tokio::test]
    async fn config_error_is_internal() {
        let response = ServerError::Config {
            message: "AUTH_TOKEN: value cannot be empty or whitespace-only".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], 500);
        assert!(body["error"].as_str().unwrap().contains("AUTH_TOKEN"));
    }
}
