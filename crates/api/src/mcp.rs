// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Model Context Protocol endpoint
//!
//! A stateless JSON-RPC 2.0 surface over the same tools as the REST routes.
//! Every HTTP request carries one message and is authenticated on its own;
//! no session id is issued. Tool failures are tool results with `isError`
//! set, protocol failures are JSON-RPC errors.

use api_client::NutritionProvider;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::IgnoredAny};
use serde_json::{Value, json};
use shared_types::ToolError;
use tracing::debug;

use crate::{
    analyzer::NutritionAnalyzer,
    error::ServerError,
    extractors::{RawBody, buffered, decode_json},
    state::ServerState,
    tools::Tool,
};

/// Protocol revision announced when the client does not ask for one
pub const PROTOCOL_VERSION: &str = "2025-03-26";

/// Name announced in `initialize`
pub const SERVER_NAME: &str = "Nutrition Analyzer MCP Server";

const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC error codes
pub mod codes {
    /// Invalid JSON was received
    pub const PARSE_ERROR: i32 = -32700;
    /// The message is not a valid request object
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// JSON-RPC 2.0 request or notification
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol marker, must be `2.0`
    pub jsonrpc: String,
    /// Request id, absent for notifications
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

impl JsonRpcRequest {
    /// Whether the sender expects no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol marker
    pub jsonrpc: String,
    /// Id of the request being answered
    pub id: Value,
    /// Successful result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Protocol error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a success response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.unwrap_or(Value::Null),
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.unwrap_or(Value::Null),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Advertised tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: &'static str,
    /// Tool description
    pub description: &'static str,
    /// JSON schema of the arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl From<Tool> for ToolDefinition {
    fn from(tool: Tool) -> Self {
        Self {
            name: tool.name(),
            description: tool.description(),
            input_schema: tool.input_schema(),
        }
    }
}

/// Outcome of a `tools/call`
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    /// Result content blocks
    pub content: Vec<ToolContent>,
    /// Set when the tool failed
    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// A text content block
#[derive(Debug, Clone, Serialize)]
pub struct ToolContent {
    /// Always `text`
    #[serde(rename = "type")]
    pub content_type: &'static str,
    /// Content text
    pub text: String,
}

impl ToolResult {
    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text",
                text,
            }],
            is_error,
        }
    }

    /// Render a tool outcome; strings are passed through, other values as JSON
    pub fn from_outcome(outcome: Result<Value, ToolError>) -> Self {
        match outcome {
            Ok(Value::String(text)) => Self::text(text, false),
            Ok(value) => Self::text(value.to_string(), false),
            Err(error) => {
                let text = serde_json::to_string(&error).unwrap_or_else(|_| error.to_string());
                Self::text(text, true)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// MCP endpoint handler
///
/// Answers `401` with a tool error body when the bearer token is wrong and
/// `202` with no body for notifications.
pub async fn mcp_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: RawBody,
) -> Response {
    let analyzer = state.analyzer();
    if let Err(e) = analyzer.authenticate(&headers) {
        return ServerError::from(e).into_response();
    }

    let request = match parse_message(&headers, &body) {
        Ok(request) => request,
        Err(response) => return Json(response).into_response(),
    };

    match dispatch(analyzer, request).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Turn a raw body into a request object
///
/// Bodies that are not JSON at all are parse errors; JSON that is not a
/// request object is an invalid request.
fn parse_message(
    headers: &HeaderMap,
    body: &RawBody,
) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let bytes = buffered(body)
        .map_err(|e| JsonRpcResponse::error(None, codes::INVALID_REQUEST, e.to_string()))?;

    let message: Value = decode_json(headers, bytes).map_err(|e| {
        let code = if serde_json::from_slice::<IgnoredAny>(bytes).is_ok() {
            codes::INVALID_REQUEST
        } else {
            codes::PARSE_ERROR
        };
        JsonRpcResponse::error(None, code, e.to_string())
    })?;

    let id = message.get("id").cloned();
    serde_json::from_value(message).map_err(|e| {
        JsonRpcResponse::error(id, codes::INVALID_REQUEST, format!("invalid request: {e}"))
    })
}

/// Answer a single authenticated JSON-RPC message
///
/// Returns `None` for notifications.
pub async fn dispatch<P>(
    analyzer: &NutritionAnalyzer<P>,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse>
where
    P: NutritionProvider,
{
    debug!(method = %request.method, "mcp request");

    if request.jsonrpc != JSONRPC_VERSION {
        return Some(JsonRpcResponse::error(
            request.id,
            codes::INVALID_REQUEST,
            "jsonrpc must be \"2.0\"",
        ));
    }

    if request.is_notification() {
        return None;
    }

    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(request.id, initialize_result(&request.params)),
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        "tools/list" => {
            let tools: Vec<ToolDefinition> = Tool::ALL.into_iter().map(Into::into).collect();
            JsonRpcResponse::success(request.id, json!({ "tools": tools }))
        }
        "tools/call" => call_tool(analyzer, request.id, request.params).await,
        method => JsonRpcResponse::error(
            request.id,
            codes::METHOD_NOT_FOUND,
            format!("method not found: {method}"),
        ),
    };

    Some(response)
}

async fn call_tool<P>(
    analyzer: &NutritionAnalyzer<P>,
    id: Option<Value>,
    params: Value,
) -> JsonRpcResponse
where
    P: NutritionProvider,
{
    let params: CallToolParams = match serde_json::from_value(params) {
        Ok(params) => params,
        Err(e) => {
            return JsonRpcResponse::error(
                id,
                codes::INVALID_PARAMS,
                format!("invalid tools/call params: {e}"),
            );
        }
    };

    let Some(tool) = Tool::from_name(&params.name) else {
        return JsonRpcResponse::error(
            id,
            codes::INVALID_PARAMS,
            format!("unknown tool: {}", params.name),
        );
    };

    let arguments = params.arguments.unwrap_or_else(|| json!({}));
    let outcome = analyzer.call_tool(tool, &arguments).await;

    match serde_json::to_value(ToolResult::from_outcome(outcome)) {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(e) => JsonRpcResponse::error(id, codes::INTERNAL_ERROR, e.to_string()),
    }
}

fn initialize_result(params: &Value) -> Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(PROTOCOL_VERSION);

    json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
