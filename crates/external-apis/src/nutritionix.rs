// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Nutritionix natural language API integration
//!
//! This module provides an implementation of the `NutritionProvider` trait for the
//! Nutritionix `v2/natural/nutrients` endpoint, which parses a free text food
//! description and returns nutrient data for every food it recognizes.

use std::time::Duration;

use api_client::{ApiError, FoodsPayload, HealthStatus, NutritionProvider};
use reqwest::{Client, RequestBuilder, header::ACCEPT};
use serde::Serialize;
use shared_types::{NonEmptyString, NutritionQuery};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

/// Production origin of the Nutritionix track API
pub const DEFAULT_BASE_URL: &str = "https://trackapi.nutritionix.com";

/// Default bound on a single lookup, in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const NATURAL_NUTRIENTS_PATH: &str = "v2/natural/nutrients";
const APP_ID_HEADER: &str = "x-app-id";
const APP_KEY_HEADER: &str = "x-app-key";

/// Configuration for the Nutritionix API client
#[derive(Debug, Clone)]
pub struct NutritionixConfig {
    /// Origin of the API; the endpoint path is appended to it
    pub base_url: Url,
    /// Application id issued by Nutritionix
    pub app_id: NonEmptyString,
    /// Application key issued by Nutritionix
    pub app_key: NonEmptyString,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl NutritionixConfig {
    /// Create a configuration against the production API with the default timeout
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is blank.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, NutritionixError> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| NutritionixError::Config(format!("invalid default base URL: {e}")))?;

        Ok(Self {
            base_url,
            app_id: NonEmptyString::new(app_id)
                .map_err(|e| NutritionixError::Config(format!("app id: {e}")))?,
            app_key: NonEmptyString::new(app_key)
                .map_err(|e| NutritionixError::Config(format!("app key: {e}")))?,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        })
    }

    /// Override the API origin
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Errors specific to the Nutritionix API client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum NutritionixError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("Nutritionix API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout error
    #[error("Request timeout after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl From<NutritionixError> for ApiError {
    fn from(value: NutritionixError) -> Self {
        match value {
            NutritionixError::Http(error) => ApiError::Http {
                message: error.to_string(),
            },
            NutritionixError::Json(error) => ApiError::InvalidResponse {
                message: error.to_string(),
            },
            NutritionixError::ApiError { status, message } => {
                ApiError::UpstreamStatus { status, message }
            }
            // only raised while building the client, never by a lookup
            NutritionixError::Config(message) => ApiError::Http { message },
            NutritionixError::Timeout { seconds } => ApiError::Timeout {
                timeout_seconds: seconds,
            },
        }
    }
}

/// Request body of the natural language nutrients endpoint
#[derive(Debug, Serialize)]
struct NaturalNutrientsRequest<'a> {
    query: &'a str,
}

/// Nutritionix API client implementation
#[derive(Debug)]
pub struct NutritionixClient {
    client: Client,
    endpoint: Url,
    config: NutritionixConfig,
}

impl NutritionixClient {
    /// Create a new Nutritionix API client
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero, the endpoint URL cannot be
    /// built from the base URL, or the HTTP client cannot be created.
    pub fn new(config: NutritionixConfig) -> Result<Self, NutritionixError> {
        if config.timeout_seconds == 0 {
            return Err(NutritionixError::Config(
                "timeout must be greater than 0".to_string(),
            ));
        }

        let endpoint = format!(
            "{}/{NATURAL_NUTRIENTS_PATH}",
            config.base_url.as_str().trim_end_matches('/')
        );
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| NutritionixError::Config(format!("invalid endpoint {endpoint}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("nutrition-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NutritionixError::Http)?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// Full URL of the natural language nutrients endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Look up nutrients for a food description
    ///
    /// Issues exactly one request. The whole exchange, including reading the
    /// body, is bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or times out, the API answers with
    /// a non-success status, or the body is not a valid nutrients payload.
    pub async fn natural_nutrients(
        &self,
        query: &NutritionQuery,
    ) -> Result<FoodsPayload, NutritionixError> {
        debug!(url = %self.endpoint, %query, "fetching nutrients from Nutritionix");

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(APP_ID_HEADER, self.config.app_id.as_str())
            .header(APP_KEY_HEADER, self.config.app_key.as_str())
            .header(ACCEPT, "application/json")
            .json(&NaturalNutrientsRequest {
                query: query.as_str(),
            });

        timeout(
            Duration::from_secs(self.config.timeout_seconds),
            self.send(request),
        )
        .await
        .map_err(|_| NutritionixError::Timeout {
            seconds: self.config.timeout_seconds,
        })?
    }

    async fn send(&self, request: RequestBuilder) -> Result<FoodsPayload, NutritionixError> {
        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Nutritionix API error: {} - {}", status.as_u16(), error_text);
            return Err(NutritionixError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let payload: FoodsPayload = serde_json::from_slice(&body)?;

        debug!(foods = payload.foods.len(), "Nutritionix lookup succeeded");
        Ok(payload)
    }

    /// Map reqwest's own deadline onto the same timeout error as ours
    fn classify(&self, error: reqwest::Error) -> NutritionixError {
        if error.is_timeout() {
            NutritionixError::Timeout {
                seconds: self.config.timeout_seconds,
            }
        } else {
            NutritionixError::Http(error)
        }
    }
}

impl NutritionProvider for NutritionixClient {
    async fn fetch_nutrients(&self, query: &NutritionQuery) -> Result<FoodsPayload, ApiError> {
        self.natural_nutrients(query).await.map_err(Into::into)
    }

    fn health(&self) -> HealthStatus {
        // Credentials are validated at construction; probing the API would spend quota.
        HealthStatus::Up
    }

    fn name(&self) -> &'static str {
        "nutritionix"
    }
}
