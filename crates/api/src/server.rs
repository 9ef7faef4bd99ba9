// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server implementation module
//!
//! This module provides the main server struct and implementation for the
//! nutrition analyzer, including server lifecycle management, router
//! configuration, and coordinated graceful shutdown using `CancellationToken`.

use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, http::HeaderName};
use external_apis::{NutritionixClient, NutritionixConfig};
use hyper::Request;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, warn};

use crate::{
    analyzer::NutritionAnalyzer,
    config::ServerConfig,
    credentials::Credentials,
    error::{ServerError, ServerResult},
    routes::create_routes,
    state::{Analyzer, ServerState},
};

// Server constants
const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
const DEFAULT_GRACEFUL_SHUTDOWN_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for server shutdown behavior
#[derive(Debug, Clone)]
pub struct ShutdownConfig {
    /// Maximum time in-flight requests get to finish once shutdown starts
    pub graceful_timeout: Duration,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            graceful_timeout: Duration::from_secs(DEFAULT_GRACEFUL_SHUTDOWN_TIMEOUT_SECONDS),
        }
    }
}

/// Main server struct
#[derive(Debug)]
pub struct Server {
    /// Server configuration
    config: ServerConfig,
    /// Application router
    router: Router,
    /// Server state
    state: ServerState,
    /// Cancellation token for coordinated shutdown
    cancellation_token: CancellationToken,
    /// Configuration for coordinated shutdown
    graceful_shutdown_config: ShutdownConfig,
}

impl Server {
    /// Create new server instance
    ///
    /// Builds the Nutritionix client from the provider settings and the
    /// credentials. No request is sent to Nutritionix.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if the configuration is inconsistent or the
    /// provider client cannot be built.
    pub fn new(
        config: ServerConfig,
        credentials: Credentials,
        shutdown_config: ShutdownConfig,
    ) -> ServerResult<Self> {
        config.validate().map_err(|e| ServerError::Config {
            message: format!("invalid server configuration: {e}"),
        })?;

        let client = Self::create_provider_client(&config, &credentials)?;
        let analyzer = NutritionAnalyzer::new(Arc::new(credentials), client);
        Ok(Self::with_analyzer(config, shutdown_config, Arc::new(analyzer)))
    }

    /// Create the Nutritionix client from server configuration
    fn create_provider_client(
        config: &ServerConfig,
        credentials: &Credentials,
    ) -> ServerResult<NutritionixClient> {
        let to_config_error = |e: external_apis::NutritionixError| ServerError::Config {
            message: format!("invalid Nutritionix client configuration: {e}"),
        };

        let provider_config = NutritionixConfig::new(
            credentials.provider_app_id.as_str(),
            credentials.provider_app_key.as_str(),
        )
        .map_err(to_config_error)?
        .with_base_url(config.provider.base_url.clone())
        .with_timeout_seconds(config.provider.timeout_seconds.value().as_secs());

        NutritionixClient::new(provider_config).map_err(to_config_error)
    }

    /// Create server around an existing orchestrator
    pub fn with_analyzer(
        config: ServerConfig,
        graceful_shutdown_config: ShutdownConfig,
        analyzer: Arc<Analyzer>,
    ) -> Self {
        let cancellation_token = CancellationToken::new();
        let state = ServerState::new(config.clone(), analyzer, cancellation_token.child_token());
        let router = Self::create_router(state.clone());

        Self {
            config,
            router,
            state,
            cancellation_token,
            graceful_shutdown_config,
        }
    }

    /// Create application router with middleware
    fn create_router(state: ServerState) -> Router {
        let timeout_duration = state.config().timeout_seconds.value();

        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                    if let Some(request_id) = req.headers().get(REQUEST_ID_HEADER) {
                        info_span!(
                            "http_request",
                            method = %req.method(),
                            uri = %req.uri(),
                            ?request_id
                        )
                    } else {
                        error!("failed to extract id from request");
                        info_span!("http_request", request_id = "unknown")
                    }
                }),
            )
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(timeout_duration));

        create_routes().layer(middleware).with_state(state)
    }

    /// Bind the configured address
    async fn bind(&self) -> ServerResult<(TcpListener, SocketAddr)> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                address: addr,
                source,
            })?;

        let actual_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Startup { source })?;

        Ok((listener, actual_addr))
    }

    /// Run the server with coordinated graceful shutdown
    ///
    /// In-flight requests get `graceful_timeout` to finish once a shutdown
    /// signal arrives.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if unable to bind to the configured address,
    /// or `ServerError::Startup` if the server fails to start.
    pub async fn run(self) -> ServerResult<()> {
        let (listener, actual_addr) = self.bind().await?;

        info!(
            address = %actual_addr,
            environment = %self.config.environment,
            provider = %self.config.provider.base_url,
            "nutrition analyzer starting",
        );

        let cancellation_token = self.cancellation_token.clone();
        let shutdown_token = cancellation_token.clone();
        tokio::spawn(async move {
            info!("spawning the graceful shutdown task");
            Self::shutdown_signal_handler(shutdown_token).await;
        });

        let serve_token = cancellation_token.clone();
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                serve_token.cancelled().await;
                info!("draining in-flight requests");
            })
            .into_future();

        let graceful_timeout = self.graceful_shutdown_config.graceful_timeout;
        let drain_deadline = async move {
            cancellation_token.cancelled().await;
            tokio::time::sleep(graceful_timeout).await;
        };

        tokio::select! {
            server_result = serve => {
                if let Err(e) = server_result {
                    error!(error = ?e, "Server error during shutdown");
                    return Err(ServerError::Shutdown { source: e });
                }
                info!("nutrition analyzer shut down gracefully");
            }
            () = drain_deadline => {
                warn!(
                    timeout_seconds = graceful_timeout.as_secs(),
                    "graceful shutdown timed out, dropping in-flight requests"
                );
            }
        }

        Ok(())
    }

    /// Handle shutdown signals and trigger coordinated cancellation
    ///
    /// This function listens for SIGINT (Ctrl+C) and SIGTERM signals,
    /// and cancels the provided cancellation token when received.
    async fn shutdown_signal_handler(cancellation_token: CancellationToken) {
        let signal_received = async {
            #[cfg(unix)]
            #[allow(clippy::expect_used)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let mut sigterm =
                    signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
                let mut sigint =
                    signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

                tokio::select! {
                    _ = sigterm.recv() => "SIGTERM",
                    _ = sigint.recv() => "SIGINT",
                }
            }

            #[cfg(not(unix))]
            #[allow(clippy::expect_used)]
            {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install CTRL+C signal handler");
                "CTRL+C"
            }
        };

        tokio::select! {
            signal_name = signal_received => {
                warn!("Shutdown signal {} received, cancelling all operations...", signal_name);
                cancellation_token.cancel();
            },
            () = cancellation_token.cancelled() => {
                info!("cancellation token already cancelled, shutdown signal handler exiting");
            }
        }
    }

    /// Returns a clone of the cancellation token for coordinated shutdown
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Initiates graceful shutdown by cancelling the server's cancellation token
    pub fn shutdown(&self) {
        info!("programmatic shutdown requested");
        self.cancellation_token.cancel();
    }

    /// Run server for testing, returns the bound address
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if unable to bind to the configured address.
    pub async fn run_for_testing(self) -> ServerResult<(SocketAddr, CancellationToken)> {
        let (listener, actual_addr) = self.bind().await?;

        let token = self.cancellation_token.child_token();
        let task = token.child_token();
        tokio::spawn(async move {
            let _ = axum::serve(listener, self.router)
                .with_graceful_shutdown(async move { task.cancelled().await })
                .await;
        });

        Ok((actual_addr, token))
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get server state for testing
    pub fn state(&self) -> &ServerState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn credentials() -> Credentials {
        Credentials::new("token", "919876543210", "app-id", "app-key").unwrap()
    }

    #[tokio::test]
    async fn server_creation() -> ServerResult<()> {
        let config = ServerConfig::for_testing();
        let server = Server::new(config, credentials(), ShutdownConfig::default())?;
        assert_eq!(server.config().environment, Environment::Testing);
        assert!(!server.cancellation_token().is_cancelled());
        assert_eq!(
            server.state().analyzer().provider().endpoint().as_str(),
            "https://trackapi.nutritionix.com/v2/natural/nutrients"
        );
        Ok(())
    }

    #[tokio::test]
    async fn programmatic_shutdown() -> ServerResult<()> {
        let config = ServerConfig::for_testing();
        let server = Server::new(config, credentials(), ShutdownConfig::default())?;

        assert!(!server.cancellation_token().is_cancelled());

        server.shutdown();

        assert!(server.cancellation_token().is_cancelled());
        assert!(server.state().cancellation_token.is_cancelled());
        Ok(())
    }

    #[test]
    fn slow_provider_bound_is_rejected() {
        let mut config = ServerConfig::for_testing();
        config.provider.timeout_seconds = config.timeout_seconds;

        let error = Server::new(config, credentials(), ShutdownConfig::default()).unwrap_err();
        assert!(matches!(error, ServerError::Config { .. }));
    }

    #[test]
    fn shutdown_config_default() {
        let config = ShutdownConfig::default();
        assert_eq!(
            config.graceful_timeout,
            Duration::from_secs(DEFAULT_GRACEFUL_SHUTDOWN_TIMEOUT_SECONDS)
        );
    }
}
