// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Raw payload types of the natural language nutrients endpoint
//!
//! These mirror the provider's wire format. Every nutrient may be absent or
//! `null`, so all of them are optional here; defaulting happens during
//! normalization.

use serde::{Deserialize, Serialize};

/// Response body of a natural language nutrients lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodsPayload {
    /// Matched foods in provider order; a missing key reads as empty
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
}

/// A single matched food as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct FoodEntry {
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub serving_qty: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<String>,
    #[serde(default)]
    pub serving_weight_grams: Option<f64>,
    #[serde(default)]
    pub nf_calories: Option<f64>,
    #[serde(default)]
    pub nf_total_fat: Option<f64>,
    #[serde(default)]
    pub nf_cholesterol: Option<f64>,
    #[serde(default)]
    pub nf_sodium: Option<f64>,
    #[serde(default)]
    pub nf_total_carbohydrate: Option<f64>,
    #[serde(default)]
    pub nf_dietary_fiber: Option<f64>,
    #[serde(default)]
    pub nf_sugars: Option<f64>,
    #[serde(default)]
    pub nf_protein: Option<f64>,
    #[serde(default)]
    pub nf_potassium: Option<f64>,
}
