// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the nutrition analyzer,
//! including configuration, the request orchestrator, and coordinated
//! cancellation.

use std::{collections::HashMap, sync::Arc};

use external_apis::NutritionixClient;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

use crate::{
    analyzer::NutritionAnalyzer,
    config::{Environment, ServerConfig},
};

/// Orchestrator wired to the live Nutritionix client
pub type Analyzer = NutritionAnalyzer<NutritionixClient>;

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// Request orchestrator, shared read-only by every handler
    analyzer: Arc<Analyzer>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `analyzer` - Request orchestrator
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(
        config: ServerConfig,
        analyzer: Arc<Analyzer>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            config,
            analyzer,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Request orchestrator
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Report service health
    ///
    /// The provider is reported from its configuration only; no outbound
    /// request is made.
    pub fn health_check(&self) -> HealthCheck {
        let (name, provider_status) = self.analyzer.provider_health();
        let provider_status = Self::convert_health_status(provider_status);

        let status = match &provider_status {
            HealthStatus::Up => HealthStatus::Up,
            HealthStatus::Degraded { reason } | HealthStatus::Down { reason } => {
                HealthStatus::Degraded {
                    reason: format!("{name}: {reason}").into_boxed_str(),
                }
            }
        };

        HealthCheck {
            status,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
            api_clients: HashMap::from([(name.to_string(), provider_status)]),
        }
    }

    /// Convert provider health status to internal health status
    fn convert_health_status(external_status: api_client::HealthStatus) -> HealthStatus {
        match external_status {
            api_client::HealthStatus::Up => HealthStatus::Up,
            api_client::HealthStatus::Degraded { reason } => HealthStatus::Degraded {
                reason: reason.into_boxed_str(),
            },
            api_client::HealthStatus::Down { reason } => HealthStatus::Down {
                reason: reason.into_boxed_str(),
            },
        }
    }
}

/// Health status of a service or dependency
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum HealthStatus {
    /// Service is fully operational and responding normally
    Up,

    /// Service is not operational or has critical failures
    Down {
        /// Human-readable explanation of why the service is down
        reason: Box<str>,
    },

    /// Service is operational but experiencing performance issues or partial failures
    Degraded {
        /// Human-readable explanation of the degradation condition
        reason: Box<str>,
    },
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
    /// Status of the nutrition provider client
    #[schema(value_type = Object)]
    pub api_clients: HashMap<String, HealthStatus>,
}
