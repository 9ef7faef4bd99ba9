// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `NutritionixClient`
//!
//! These tests use wiremock to stand in for the Nutritionix API and check the
//! outbound request contract and the classification of every failure.

use std::time::Duration;

use api_client::{ApiError, NutritionProvider};
use external_apis::{NutritionixClient, NutritionixConfig, normalize};
use serde_json::json;
use shared_types::{ErrorKind, NutritionQuery, ToolError};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

use fixtures::*;

const TEST_TIMEOUT_SECONDS: u64 = 1;

/// Create a test client pointed at the mock server
fn create_test_client(base_url: &str) -> NutritionixClient {
    let config = NutritionixConfig::new(TEST_APP_ID, TEST_APP_KEY)
        .unwrap()
        .with_base_url(Url::parse(base_url).unwrap())
        .with_timeout_seconds(TEST_TIMEOUT_SECONDS);
    NutritionixClient::new(config).unwrap()
}

fn query(text: &str) -> NutritionQuery {
    NutritionQuery::new(text).unwrap()
}

/// Test successful lookup and normalization of the first food
#[tokio::test]
async fn natural_nutrients_success() {
    let mock_server = MockServer::start().await;
    NutritionixFixture::mount_query(
        &mock_server,
        "2 boiled eggs",
        NutritionixFixture::boiled_eggs(),
    )
    .await;
    let client = create_test_client(&mock_server.uri());

    let payload = client.fetch_nutrients(&query("2 boiled eggs")).await.unwrap();
    assert_eq!(payload.foods.len(), 1);

    let fact = normalize(&payload).unwrap();
    assert_eq!(fact.food, "egg");
    assert_eq!(fact.calories, 155.0);
    assert_eq!(fact.serving.quantity, 2.0);
    assert_eq!(fact.serving.unit, "large");
    assert_eq!(fact.source, "Nutritionix API");
}

/// Test that the trimmed query is what goes over the wire
#[tokio::test]
async fn natural_nutrients_sends_trimmed_query() {
    let mock_server = MockServer::start().await;
    NutritionixFixture::mount_query(
        &mock_server,
        "1 banana",
        NutritionixFixture::sparse_banana(),
    )
    .await;
    let client = create_test_client(&mock_server.uri());

    let payload = client.fetch_nutrients(&query("  1 banana  ")).await.unwrap();
    let fact = normalize(&payload).unwrap();

    assert_eq!(fact.food, "banana");
    assert_eq!(fact.calories, 105.02);
    assert_eq!(fact.macronutrients.sugars_g, 0.0);
    assert_eq!(fact.serving.weight_grams, 0.0);
}

/// Test provider credential and content headers
#[tokio::test]
async fn natural_nutrients_sends_provider_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .and(header("x-app-id", TEST_APP_ID))
        .and(header("x-app-key", TEST_APP_KEY))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(NutritionixFixture::empty()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let payload = client.fetch_nutrients(&query("apple")).await.unwrap();
    assert!(payload.foods.is_empty());
}

/// Test that an empty food list surfaces as not found after normalization
#[tokio::test]
async fn natural_nutrients_no_match() {
    let mock_server = MockServer::start().await;
    NutritionixFixture::mount_query(&mock_server, "xyzzy", NutritionixFixture::empty()).await;
    let client = create_test_client(&mock_server.uri());

    let payload = client.fetch_nutrients(&query("xyzzy")).await.unwrap();
    let error = normalize(&payload).unwrap_err();
    assert_eq!(error.error_kind, ErrorKind::NotFound);
}

/// Test API server error
#[tokio::test]
async fn natural_nutrients_server_error() {
    let mock_server = MockServer::start().await;
    NutritionixFixture::mount_status(&mock_server, 500, "Internal Server Error").await;
    let client = create_test_client(&mock_server.uri());

    let result = client.fetch_nutrients(&query("2 boiled eggs")).await;

    match result.unwrap_err() {
        ApiError::UpstreamStatus { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected UpstreamStatus error, got: {other:?}"),
    }
}

/// Test API authentication failure is reported as an upstream status
#[tokio::test]
async fn natural_nutrients_unauthorized() {
    let mock_server = MockServer::start().await;
    NutritionixFixture::mount_status(&mock_server, 401, r#"{"message":"unauthorized"}"#).await;
    let client = create_test_client(&mock_server.uri());

    let error: ToolError = client
        .fetch_nutrients(&query("2 boiled eggs"))
        .await
        .unwrap_err()
        .into();

    assert_eq!(error.error_kind, ErrorKind::UpstreamError);
    assert!(error.message.contains("401"));
}

/// Test a body that is not a nutrients payload
#[tokio::test]
async fn natural_nutrients_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.fetch_nutrients(&query("2 boiled eggs")).await;

    match result.unwrap_err() {
        ApiError::InvalidResponse { .. } => {}
        other => panic!("Expected InvalidResponse error, got: {other:?}"),
    }
}

/// Test a payload whose foods field has the wrong shape
#[tokio::test]
async fn natural_nutrients_wrong_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foods": "egg"})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let error: ToolError = client
        .fetch_nutrients(&query("egg"))
        .await
        .unwrap_err()
        .into();

    assert_eq!(error.error_kind, ErrorKind::BadUpstreamResponse);
}

/// Test the bounded timeout
#[tokio::test]
async fn natural_nutrients_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(NutritionixFixture::boiled_eggs())
                .set_delay(Duration::from_secs(TEST_TIMEOUT_SECONDS + 2)),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.fetch_nutrients(&query("2 boiled eggs")).await;

    match result.unwrap_err() {
        ApiError::Timeout { timeout_seconds } => {
            assert_eq!(timeout_seconds, TEST_TIMEOUT_SECONDS);
        }
        other => panic!("Expected Timeout error, got: {other:?}"),
    }
}

/// Test that nothing is retried after a failure
#[tokio::test]
async fn natural_nutrients_single_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.fetch_nutrients(&query("2 boiled eggs")).await;
    assert!(result.is_err());
}

/// Test a provider that cannot be reached
#[tokio::test]
async fn natural_nutrients_connection_refused() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = create_test_client(&uri);
    let error: ToolError = client
        .fetch_nutrients(&query("2 boiled eggs"))
        .await
        .unwrap_err()
        .into();

    assert_eq!(error.error_kind, ErrorKind::UpstreamError);
}
