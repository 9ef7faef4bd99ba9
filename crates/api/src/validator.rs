// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Inbound query validation

use serde_json::Value;
use shared_types::{NutritionQuery, ToolError};

/// Name of the query field in tool arguments
pub const FOOD_QUERY_FIELD: &str = "food_query";

/// Extract and trim the food query from a tool payload
///
/// # Errors
///
/// Returns a `bad_request` [`ToolError`] if the payload is not an object, or
/// `food_query` is missing, not a string, or blank.
pub fn validate_query(payload: &Value) -> Result<NutritionQuery, ToolError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ToolError::bad_request("request body must be a JSON object"))?;

    let field = object
        .get(FOOD_QUERY_FIELD)
        .ok_or_else(|| ToolError::bad_request("food_query is required"))?;

    let text = field
        .as_str()
        .ok_or_else(|| ToolError::bad_request("food_query must be a string"))?;

    NutritionQuery::new(text).ok_or_else(|| ToolError::bad_request("food query cannot be empty"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shared_types::ErrorKind;

    use super::*;

    #[test]
    fn accepts_and_trims() {
        let query = validate_query(&json!({"food_query": "  2 boiled eggs\n"})).unwrap();
        assert_eq!(query.as_str(), "2 boiled eggs");
    }

    #[test]
    fn ignores_extra_fields() {
        let query = validate_query(&json!({"food_query": "1 banana", "unit": "g"})).unwrap();
        assert_eq!(query.as_str(), "1 banana");
    }

    #[test]
    fn rejects_invalid_payloads() {
        let cases = [
            (json!({}), "food_query is required"),
            (json!({"food_query": ""}), "food query cannot be empty"),
            (json!({"food_query": " \t\n "}), "food query cannot be empty"),
            (json!({"food_query": 42}), "food_query must be a string"),
            (json!({"food_query": null}), "food_query must be a string"),
            (json!(["1 banana"]), "request body must be a JSON object"),
            (json!("1 banana"), "request body must be a JSON object"),
        ];

        for (payload, message) in cases {
            let error = validate_query(&payload).unwrap_err();
            assert_eq!(error.error_kind, ErrorKind::BadRequest, "{payload}");
            assert_eq!(error.message, message, "{payload}");
        }
    }
}
