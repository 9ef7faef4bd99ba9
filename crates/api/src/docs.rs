// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` document definition

use shared_types::{ErrorKind, Macronutrients, Micronutrients, NutritionFact, Serving, ToolError};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    config::Environment,
    routes::handlers::{self, AnalyzeNutritionRequest, ValidateResponse},
    state::{HealthCheck, HealthStatus},
    tools::About,
};

/// `OpenAPI` document of the REST surface
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Nutrition Analyzer API",
        description = "Nutrition facts for plain language food descriptions, backed by Nutritionix."
    ),
    paths(
        handlers::health_handler,
        handlers::analyze_nutrition_handler,
        handlers::validate_handler,
        handlers::about_handler,
    ),
    components(schemas(
        AnalyzeNutritionRequest,
        NutritionFact,
        Serving,
        Macronutrients,
        Micronutrients,
        ToolError,
        ErrorKind,
        ValidateResponse,
        About,
        HealthCheck,
        HealthStatus,
        Environment,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "tools", description = "Authenticated nutrition tools"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` security scheme
#[derive(Debug)]
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}
