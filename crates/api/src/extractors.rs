// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! JSON body decoding with precise error messages
//!
//! Tool bodies are read as raw bytes so the bearer token can be checked before
//! anything is parsed. [`decode_json`] then turns them into a typed value and
//! reports syntax and shape problems in terms a caller can act on.

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;

use crate::error::ServerError;

mod error_hints {
    pub const MISSING_COMMA: &str =
        "check for missing or extra commas between object properties or array elements";
    pub const MISSING_BRACE: &str = "check for missing closing brace '}' for JSON object";
    pub const MISSING_BRACKET: &str = "check for missing closing bracket ']' for JSON array";
    pub const MISSING_QUOTES: &str =
        "check for missing or improperly escaped quotes around string values";
    pub const CONTROL_CHARS: &str = "JSON contains invalid control characters that must be escaped";
    pub const EXPECTED_VALUE: &str =
        "expected a valid JSON value (string, number, boolean, null, object, or array)";
    pub const DEFAULT_SYNTAX: &str = "check JSON formatting and structure";
    pub const EMPTY_BODY: &str = "request body is empty, expected valid JSON";
    pub const TRUNCATED_JSON: &str =
        "unexpected end of JSON input, request appears to be truncated";
}

/// Largest accepted tool body
pub const MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

/// Largest body the router buffers at all
///
/// Must stay above [`MAX_JSON_PAYLOAD_SIZE`] so oversized tool bodies reach
/// the handler, get authenticated, and are refused by [`decode_json`].
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024;

/// A tool body as buffered by axum, or the reason buffering failed
pub type RawBody = Result<Bytes, BytesRejection>;

/// Borrow the bytes of a buffered body
///
/// # Errors
///
/// Returns `ServerError::JsonError` if axum could not buffer the body, for
/// instance when it exceeds [`MAX_REQUEST_BODY_SIZE`].
pub fn buffered(body: &RawBody) -> Result<&[u8], ServerError> {
    body.as_deref().map_err(|rejection| ServerError::JsonError {
        message: format!(
            "failed to read request body (max: {MAX_JSON_PAYLOAD_SIZE} bytes): {}",
            rejection.body_text()
        ),
    })
}

/// Decode a JSON request body
///
/// # Errors
///
/// Returns `ServerError::JsonError` if the content type is not JSON, the body
/// is empty or oversized, or it does not parse as `T`.
pub fn decode_json<T>(headers: &HeaderMap, bytes: &[u8]) -> Result<T, ServerError>
where
    T: DeserializeOwned,
{
    if let Some(content_type) = headers.get(CONTENT_TYPE)
        && let Ok(content_type_str) = content_type.to_str()
        && !content_type_str.starts_with("application/json")
    {
        return Err(ServerError::JsonError {
            message: format!(
                "invalid content-type: expected 'application/json', got '{content_type_str}'"
            ),
        });
    }

    if bytes.len() > MAX_JSON_PAYLOAD_SIZE {
        return Err(ServerError::JsonError {
            message: format!(
                "request body too large: {} bytes (max: {} bytes)",
                bytes.len(),
                MAX_JSON_PAYLOAD_SIZE
            ),
        });
    }

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ServerError::JsonError {
            message: error_hints::EMPTY_BODY.to_string(),
        });
    }

    serde_json::from_slice::<T>(bytes).map_err(|err| {
        let message = if err.is_syntax() {
            format!(
                "invalid JSON syntax at line {}, column {}: {}",
                err.line(),
                err.column(),
                json_syntax_hint(&err)
            )
        } else if err.is_data() {
            format!("JSON data validation failed: {}", data_validation_hint(&err))
        } else if err.is_eof() {
            error_hints::TRUNCATED_JSON.to_string()
        } else {
            format!("JSON parsing error: {err}")
        };

        ServerError::JsonError { message }
    })
}

fn json_syntax_hint(err: &serde_json::Error) -> &'static str {
    let err_msg = err.to_string();

    if err_msg.contains("expected ','") || err_msg.contains("trailing comma") {
        error_hints::MISSING_COMMA
    } else if err_msg.contains("expected '}'") {
        error_hints::MISSING_BRACE
    } else if err_msg.contains("expected ']'") {
        error_hints::MISSING_BRACKET
    } else if err_msg.contains("expected '\"'") {
        error_hints::MISSING_QUOTES
    } else if err_msg.contains("control character") {
        error_hints::CONTROL_CHARS
    } else if err_msg.contains("expected value") {
        error_hints::EXPECTED_VALUE
    } else {
        error_hints::DEFAULT_SYNTAX
    }
}

fn data_validation_hint(err: &serde_json::Error) -> String {
    let err_msg = err.to_string();

    if err_msg.contains("invalid type") {
        if err_msg.contains("expected a string") || err_msg.contains("expected string") {
            "expected a string value, but received a different data type".to_string()
        } else if err_msg.contains("expected integer") || err_msg.contains("expected number") {
            "expected a numeric value, but received a different data type".to_string()
        } else if err_msg.contains("expected a map") || err_msg.contains("expected object") {
            "expected a JSON object, but received a different data type".to_string()
        } else {
            format!("data type mismatch: {err_msg}")
        }
    } else if err_msg.contains("missing field") {
        format!("required field is missing: {err_msg}")
    } else if err_msg.contains("unknown field") {
        format!("unrecognized field found: {err_msg}")
    } else {
        err_msg
    }
}
