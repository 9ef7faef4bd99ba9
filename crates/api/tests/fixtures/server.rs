// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

//! Running server fixture

use std::net::SocketAddr;

use nutrition_api::{
    Credentials, Server, ServerConfig, ShutdownConfig, config::TimeoutSeconds,
};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-bearer-token";
pub const TEST_NUMBER: &str = "919876543210";
pub const TEST_APP_ID: &str = "test-app-id";
pub const TEST_APP_KEY: &str = "test-app-key";

/// A server bound to an ephemeral port, talking to a mock provider
#[derive(Debug)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub provider: MockServer,
    client: reqwest::Client,
    shutdown: CancellationToken,
}

impl TestServer {
    /// Start with the default provider timeout
    pub async fn start() -> Self {
        Self::start_with_provider_timeout(10).await
    }

    /// Start with a custom provider timeout in seconds
    pub async fn start_with_provider_timeout(seconds: u64) -> Self {
        let provider = MockServer::start().await;

        let mut config = ServerConfig::for_testing()
            .with_provider_base_url(Url::parse(&provider.uri()).expect("mock uri is a URL"));
        config.provider.timeout_seconds =
            TimeoutSeconds::new(seconds).expect("valid provider timeout");

        let credentials = Credentials::new(TEST_TOKEN, TEST_NUMBER, TEST_APP_ID, TEST_APP_KEY)
            .expect("valid test credentials");

        let (addr, shutdown) = Server::new(config, credentials, ShutdownConfig::default())
            .expect("Failed to create server")
            .run_for_testing()
            .await
            .expect("Failed to start test server");

        Self {
            addr,
            provider,
            client: reqwest::Client::new(),
            shutdown,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    /// POST with the valid bearer token
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.post_with_token(path, TEST_TOKEN)
    }

    pub fn post_with_token(&self, path: &str, token: &str) -> RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(token)
    }

    pub fn post_anonymous(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    /// Send a JSON-RPC message to the MCP endpoint
    pub async fn mcp(&self, message: &Value) -> Response {
        self.post("/mcp")
            .json(message)
            .send()
            .await
            .expect("Failed to send request")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
