// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Bearer token authentication

use std::sync::Arc;

use axum::http::{HeaderMap, header::AUTHORIZATION};
use shared_types::ToolError;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::credentials::Credentials;

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The remainder after `Bearer ` is returned as is, so surrounding whitespace
/// never matches the configured token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let authz = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok())?;
    authz
        .strip_prefix("Bearer ")
        .filter(|token| !token.trim().is_empty())
}

/// Gate that checks callers against the configured server token
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Arc<Credentials>,
}

impl Authenticator {
    /// Create an authenticator for the given credentials
    pub fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }

    /// Check a presented token against the configured one in constant time
    pub fn verify(&self, token: &str) -> bool {
        let expected = self.credentials.server_auth_token.as_str().as_bytes();
        token.as_bytes().ct_eq(expected).into()
    }

    /// Authenticate a request by its headers
    ///
    /// # Errors
    ///
    /// Returns an `unauthorized` [`ToolError`] if the header is missing, is not a
    /// bearer credential, or carries the wrong token.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<(), ToolError> {
        let Some(token) = bearer_token(headers) else {
            debug!("rejecting request without bearer token");
            return Err(ToolError::unauthorized("bearer token is required"));
        };

        if self.verify(token) {
            Ok(())
        } else {
            debug!("rejecting request with invalid bearer token");
            Err(ToolError::unauthorized("invalid bearer token"))
        }
    }
}
