// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Nutrition provider abstractions
//!
//! This crate defines the seam between the request pipeline and the external
//! nutrition data provider.
//!
//! # Core Abstractions
//!
//! - **`NutritionProvider` Trait**: one outbound lookup per call, plus a health report
//! - **Raw Payload Types**: [`FoodsPayload`] as returned by the natural language endpoint
//! - **Error Classification**: [`ApiError`] and its mapping onto the tool error taxonomy

use shared_types::{ErrorKind, NutritionQuery, ToolError};
use thiserror::Error;

pub mod health;
pub mod types;

pub use health::*;
pub use types::*;

/// Interface of an external nutrition data provider
///
/// Implementations perform exactly one outbound request per call and never
/// retry. The pipeline is generic over this trait so tests can inject fakes.
pub trait NutritionProvider: Send + Sync {
    /// Look up nutrients for a free text food description
    ///
    /// # Errors
    ///
    /// Returns an error if the request times out, the provider answers with a
    /// non-success status, or the body cannot be parsed.
    fn fetch_nutrients(
        &self,
        query: &NutritionQuery,
    ) -> impl Future<Output = Result<FoodsPayload, ApiError>> + Send;

    /// Report whether the provider is usable without issuing a request
    fn health(&self) -> HealthStatus;

    /// Get the name/identifier of this provider
    fn name(&self) -> &'static str;
}

/// Errors that can occur when calling a nutrition provider
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, body read)
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// The provider answered with a non-success status
    #[error("provider returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Network timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },
}

impl ApiError {
    /// Classify this error within the tool error taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Http { .. } | ApiError::UpstreamStatus { .. } => ErrorKind::UpstreamError,
            ApiError::InvalidResponse { .. } => ErrorKind::BadUpstreamResponse,
            ApiError::Timeout { .. } => ErrorKind::Timeout,
        }
    }
}

impl From<ApiError> for ToolError {
    fn from(value: ApiError) -> Self {
        ToolError::new(value.kind(), value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_keeps_code_in_message() {
        let error: ToolError = ApiError::UpstreamStatus {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
        .into();

        assert_eq!(error.error_kind, ErrorKind::UpstreamError);
        assert!(error.message.contains("500"));
        assert!(error.message.contains("Internal Server Error"));
    }

    #[test]
    fn error_classification() {
        assert_eq!(
            ApiError::Timeout { timeout_seconds: 10 }.kind(),
            ErrorKind::Timeout
        );
        assert_eq!(
            ApiError::InvalidResponse {
                message: "expected value".to_string()
            }
            .kind(),
            ErrorKind::BadUpstreamResponse
        );
        assert_eq!(
            ApiError::Http {
                message: "connection refused".to_string()
            }
            .kind(),
            ErrorKind::UpstreamError
        );
    }
}
