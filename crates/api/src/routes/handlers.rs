// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! REST handlers for the nutrition tools and the health check. Tool bodies are
//! taken as raw bytes so authentication happens before any parsing.

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use shared_types::{NutritionFact, ToolError};
use utoipa::ToSchema;

use crate::{
    error::ServerError,
    extractors::RawBody,
    state::{HealthCheck, ServerState},
    tools::About,
};

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check endpoint",
    description = "Returns the current health status of the service including version, environment information, and the configuration status of the Nutritionix client. No request is sent to Nutritionix.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    )
)]
pub async fn health_handler(State(state): State<ServerState>) -> Json<HealthCheck> {
    Json(state.health_check())
}

/// Nutrition analysis request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeNutritionRequest {
    /// Food item and quantity in plain language
    #[schema(example = "2 boiled eggs")]
    pub food_query: String,
}

/// Response of the `validate` tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ValidateResponse {
    /// Validation number of the server operator
    #[schema(example = "919876543210")]
    pub validation_number: String,
}

/// Nutrition analysis
///
/// Looks the food description up with Nutritionix and returns the first
/// matched food in a fixed schema. Missing nutrient values are reported as `0`.
///
/// # Errors
///
/// Returns `ServerError::Tool` carrying the classified failure.
#[utoipa::path(
    post,
    path = "/v1/tools/analyze_nutrition",
    tag = "tools",
    summary = "Analyze nutrition of a food description",
    description = "Authenticates the caller, validates `food_query`, performs a single Nutritionix lookup and normalizes the first matched food.",
    request_body = AnalyzeNutritionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Nutrition facts of the first matched food", body = NutritionFact),
        (status = 400, description = "food_query missing, not a string, or blank", body = ToolError),
        (status = 401, description = "Missing or invalid bearer token", body = ToolError),
        (status = 404, description = "No food matched the query", body = ToolError),
        (status = 502, description = "Nutritionix failed or answered with an unreadable body", body = ToolError),
        (status = 504, description = "Nutritionix did not answer in time", body = ToolError)
    )
)]
pub async fn analyze_nutrition_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: RawBody,
) -> Result<Json<NutritionFact>, ServerError> {
    let fact = state.analyzer().analyze(&headers, &body).await?;
    Ok(Json(fact))
}

/// Operator validation number
///
/// # Errors
///
/// Returns `ServerError::Tool` if the bearer token is missing or wrong.
#[utoipa::path(
    post,
    path = "/v1/tools/validate",
    tag = "tools",
    summary = "Return the operator validation number",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Validation number", body = ValidateResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ToolError)
    )
)]
pub async fn validate_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> Result<Json<ValidateResponse>, ServerError> {
    let validation_number = state.analyzer().validate(&headers)?;
    Ok(Json(ValidateResponse { validation_number }))
}

/// Service description
///
/// # Errors
///
/// Returns `ServerError::Tool` if the bearer token is missing or wrong.
#[utoipa::path(
    post,
    path = "/v1/tools/about",
    tag = "tools",
    summary = "Describe the service",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Service name and description", body = About),
        (status = 401, description = "Missing or invalid bearer token", body = ToolError)
    )
)]
pub async fn about_handler(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> Result<Json<About>, ServerError> {
    let about = state.analyzer().about(&headers)?;
    Ok(Json(about))
}
