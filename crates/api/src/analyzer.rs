// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request orchestration
//!
//! [`NutritionAnalyzer`] runs the tool pipeline in a fixed order and stops at
//! the first failure:
//!
//! 1. authenticate the bearer token
//! 2. decode the body and validate `food_query`
//! 3. one provider lookup
//! 4. normalize the first matched food
//!
//! Nothing is retried and nothing is kept between calls. The provider is never
//! contacted for a request that fails steps 1 or 2.

use std::{sync::Arc, time::Instant};

use api_client::{HealthStatus, NutritionProvider};
use axum::http::HeaderMap;
use external_apis::normalize;
use serde_json::Value;
use shared_types::{ErrorKind, NutritionFact, ToolError};
use tracing::{debug, info, warn};

use crate::{
    auth::Authenticator,
    credentials::Credentials,
    extractors::{RawBody, buffered, decode_json},
    metrics,
    tools::{About, Tool},
    validator::validate_query,
};

/// Orchestrates tool calls against a nutrition provider
#[derive(Debug)]
pub struct NutritionAnalyzer<P> {
    authenticator: Authenticator,
    credentials: Arc<Credentials>,
    provider: P,
}

impl<P> NutritionAnalyzer<P>
where
    P: NutritionProvider,
{
    /// Create an analyzer over the given provider
    pub fn new(credentials: Arc<Credentials>, provider: P) -> Self {
        Self {
            authenticator: Authenticator::new(Arc::clone(&credentials)),
            credentials,
            provider,
        }
    }

    /// Get the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Provider health, without issuing a request
    pub fn provider_health(&self) -> (&'static str, HealthStatus) {
        (self.provider.name(), self.provider.health())
    }

    /// Check the bearer token of a request
    ///
    /// # Errors
    ///
    /// Returns an `unauthorized` [`ToolError`] on a missing or wrong token.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<(), ToolError> {
        self.authenticator.authenticate(headers)
    }

    /// Run `analyze_nutrition` for a raw request
    ///
    /// The bearer token is checked before the body is parsed.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ToolError`] of the first failing step.
    pub async fn analyze(
        &self,
        headers: &HeaderMap,
        body: &RawBody,
    ) -> Result<NutritionFact, ToolError> {
        let result = self.authenticated_lookup(headers, body).await;
        record(Tool::AnalyzeNutrition, &result);
        result
    }

    /// Return the operator validation number for an authenticated request
    ///
    /// # Errors
    ///
    /// Returns an `unauthorized` [`ToolError`] on a missing or wrong token.
    pub fn validate(&self, headers: &HeaderMap) -> Result<String, ToolError> {
        let result = self
            .authenticate(headers)
            .map(|()| self.validation_number());
        record(Tool::Validate, &result);
        result
    }

    /// Describe the service for an authenticated request
    ///
    /// # Errors
    ///
    /// Returns an `unauthorized` [`ToolError`] on a missing or wrong token.
    pub fn about(&self, headers: &HeaderMap) -> Result<About, ToolError> {
        let result = self.authenticate(headers).map(|()| About::service());
        record(Tool::About, &result);
        result
    }

    /// Invoke a tool for a caller that has already been authenticated
    ///
    /// # Errors
    ///
    /// Returns the classified [`ToolError`] of the first failing step.
    pub async fn call_tool(&self, tool: Tool, arguments: &Value) -> Result<Value, ToolError> {
        let result = match tool {
            Tool::AnalyzeNutrition => self
                .lookup(arguments)
                .await
                .and_then(|fact| to_value(&fact)),
            Tool::Validate => Ok(Value::String(self.validation_number())),
            Tool::About => to_value(&About::service()),
        };

        record(tool, &result);
        result
    }

    async fn authenticated_lookup(
        &self,
        headers: &HeaderMap,
        body: &RawBody,
    ) -> Result<NutritionFact, ToolError> {
        self.authenticate(headers)?;
        let payload: Value = buffered(body)
            .and_then(|bytes| decode_json(headers, bytes))
            .map_err(|e| ToolError::bad_request(e.to_string()))?;
        self.lookup(&payload).await
    }

    async fn lookup(&self, payload: &Value) -> Result<NutritionFact, ToolError> {
        let query = validate_query(payload)?;
        debug!(provider = self.provider.name(), query = %query, "looking up nutrients");

        let started = Instant::now();
        let result = self.provider.fetch_nutrients(&query).await;
        let label = match &result {
            Ok(_) => "success",
            Err(e) => e.kind().as_str(),
        };
        metrics::observe_provider_duration(label, started.elapsed().as_secs_f64());

        let payload = result.inspect_err(|e| warn!(error = %e, "nutrition lookup failed"))?;
        let fact = normalize(&payload)?;
        info!(food = %fact.food, calories = fact.calories, "nutrition lookup succeeded");
        Ok(fact)
    }

    fn validation_number(&self) -> String {
        self.credentials.validation_number.as_str().to_string()
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| {
        ToolError::new(
            ErrorKind::BadUpstreamResponse,
            format!("failed to encode tool result: {e}"),
        )
    })
}

fn record<T>(tool: Tool, result: &Result<T, ToolError>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(e) => e.error_kind.as_str(),
    };
    metrics::inc_tool_calls(tool.name(), outcome);
}
