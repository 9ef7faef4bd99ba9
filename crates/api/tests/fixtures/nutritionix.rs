// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

//! Nutritionix provider fixtures
//!
//! Canned natural language responses and mock mounting helpers.

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use super::{TEST_APP_ID, TEST_APP_KEY};

/// Path of the natural language nutrients endpoint
pub const NUTRIENTS_PATH: &str = "/v2/natural/nutrients";

/// Response for "2 boiled eggs"
pub fn boiled_eggs() -> Value {
    json!({
        "foods": [{
            "food_name": "egg",
            "serving_qty": 2,
            "serving_unit": "large",
            "serving_weight_grams": 100,
            "nf_calories": 155,
            "nf_total_fat": 10.61,
            "nf_cholesterol": 373,
            "nf_sodium": 124,
            "nf_total_carbohydrate": 1.12,
            "nf_dietary_fiber": 0,
            "nf_sugars": 1.12,
            "nf_protein": 12.58,
            "nf_potassium": 126
        }]
    })
}

/// Response with no matched foods
pub fn no_foods() -> Value {
    json!({ "foods": [] })
}

/// Expect exactly one lookup for `query` and answer it
pub async fn mount_query(provider: &MockServer, query: &str, response: Value) {
    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .and(header("x-app-id", TEST_APP_ID))
        .and(header("x-app-key", TEST_APP_KEY))
        .and(body_json(json!({ "query": query })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(provider)
        .await;
}

/// Answer every lookup with a fixed status, expecting `calls` lookups
pub async fn mount_status(provider: &MockServer, status: u16, body: &str, calls: u64) {
    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(calls)
        .mount(provider)
        .await;
}

/// Answer every lookup after `delay`
pub async fn mount_delayed(provider: &MockServer, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(boiled_eggs())
                .set_delay(delay),
        )
        .mount(provider)
        .await;
}

/// Fail the test if the provider is contacted at all
pub async fn forbid_lookups(provider: &MockServer) {
    Mock::given(method("POST"))
        .and(path(NUTRIENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(boiled_eggs()))
        .expect(0)
        .mount(provider)
        .await;
}
