// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry via macros and
//! an Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use prometheus::{
    Encoder, HistogramVec, IntCounterVec, TextEncoder, register_histogram_vec,
    register_int_counter_vec,
};
use tracing::error;

/// Total number of tool calls, labeled by tool and outcome.
#[allow(clippy::expect_used)]
pub static TOOL_CALLS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "nutrition_api_tool_calls_total",
        "Total number of tool calls, labeled by tool and outcome",
        &["tool", "outcome"]
    )
    .expect("Failed to create nutrition_api_tool_calls_total counter vec")
});

/// Histogram for nutrition provider request durations in seconds.
#[allow(clippy::expect_used)]
pub static PROVIDER_REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "nutrition_api_provider_request_duration",
        "Nutrition provider request durations in seconds",
        &["result"],
        vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("Failed to create provider request duration histogram")
});

/// Count a finished tool call
///
/// # Arguments
/// * `tool` - The tool name
/// * `outcome` - `success` or the error kind of the failure
pub fn inc_tool_calls(tool: &str, outcome: &str) {
    TOOL_CALLS.with_label_values(&[tool, outcome]).inc();
}

/// Observe the duration of a provider request
///
/// # Arguments
/// * `result` - `success` or the error kind of the failure
/// * `duration_secs` - The duration of the request in seconds
pub fn observe_provider_duration(result: &str, duration_secs: f64) {
    PROVIDER_REQUEST_DURATION
        .with_label_values(&[result])
        .observe(duration_secs);
}

/// Axum handler that exports metrics in Prometheus text format
pub async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!(error = %e, "failed to encode metrics");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response()
}
