// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration for the nutrition analyzer.

pub mod handlers;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::{about_handler, analyze_nutrition_handler, health_handler, validate_handler};

use crate::{
    extractors::MAX_REQUEST_BODY_SIZE,
    mcp::mcp_handler,
    metrics::metrics_handler,
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes
///
/// Monitoring and documentation routes are open; every tool route checks the
/// bearer token itself.
pub fn create_routes() -> Router<ServerState> {
    let monitoring_routes = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler));

    let docs_routes = Router::new()
        .route("/api-doc/openapi.json", get(openapi_spec))
        .route("/swagger-ui", get(swagger_ui));

    let tool_routes = Router::new()
        .route("/tools/analyze_nutrition", post(analyze_nutrition_handler))
        .route("/tools/validate", post(validate_handler))
        .route("/tools/about", post(about_handler));

    Router::new()
        .merge(monitoring_routes)
        .merge(docs_routes)
        .nest("/v1", tool_routes)
        .route("/mcp", post(mcp_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
}
