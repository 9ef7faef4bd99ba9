// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Structured tool failures
//!
//! Every failure of a tool call is reported to the caller as a single
//! `{error_kind, message}` object. The transport decides how to surface it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Failure classes of the nutrition pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bearer token missing or not matching the configured token
    Unauthorized,
    /// Food query missing, not a string, or blank
    BadRequest,
    /// Provider did not answer within the configured bound
    Timeout,
    /// Provider answered with a non-success status or could not be reached
    UpstreamError,
    /// Provider answered with a body that could not be parsed
    BadUpstreamResponse,
    /// Provider matched no food for the query
    NotFound,
}

impl ErrorKind {
    /// Wire name of the kind, identical to its serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::BadRequest => "bad_request",
            Self::Timeout => "timeout",
            Self::UpstreamError => "upstream_error",
            Self::BadUpstreamResponse => "bad_upstream_response",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified tool failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, ToSchema)]
#[error("{error_kind}: {message}")]
pub struct ToolError {
    /// Failure class
    pub error_kind: ErrorKind,
    /// Human-readable description
    pub message: String,
}

impl ToolError {
    /// Create a new tool error
    pub fn new(error_kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            error_kind,
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }
}
