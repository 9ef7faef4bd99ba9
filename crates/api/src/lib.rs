// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Nutrition Analyzer Server Implementation
//!
//! This crate provides the HTTP server for the nutrition analyzer, built with Axum.
//! A caller sends a plain language food description and gets back a normalized
//! nutrition record sourced from the Nutritionix API.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration and environment management with hierarchical loading
//! - [`credentials`]: The immutable credential context loaded at startup
//! - [`auth`]: Constant-time bearer token authentication
//! - [`validator`]: Extraction and trimming of `food_query`
//! - [`analyzer`]: The request orchestrator running the tool pipeline
//! - [`tools`]: Catalogue of the exposed tools
//! - [`error`]: Error types and HTTP response handling with proper status codes
//! - [`state`]: Shared application state management with cancellation token support
//! - [`server`]: Main server implementation, lifecycle, and coordinated shutdown
//! - [`routes`]: Route configuration and REST handlers
//! - [`mcp`]: Stateless Model Context Protocol endpoint
//! - [`metrics`]: Prometheus counters and histograms
//! - [`openapi`]: `OpenAPI` specification and Swagger UI endpoints for API documentation
//!
//! # Key Features
//!
//! - **Single Bounded Lookup**: one Nutritionix request per call, never retried
//! - **Fixed Output Schema**: missing nutrients are reported as `0`
//! - **Fail Fast**: unauthenticated or invalid requests never reach the provider
//! - **Graceful Shutdown**: coordinated termination using `CancellationToken`

pub mod analyzer;
pub mod auth;
pub mod config;
pub mod credentials;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod mcp;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;
pub mod tools;
pub mod validator;

pub use analyzer::NutritionAnalyzer;
pub use config::{Environment, ServerConfig};
pub use credentials::Credentials;
pub use error::{ServerError, ServerResult};
pub use server::{Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
pub use tools::Tool;
