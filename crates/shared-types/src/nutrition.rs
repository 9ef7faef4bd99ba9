// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized nutrition types
//!
//! [`NutritionFact`] is the fixed output schema returned by `analyze_nutrition`.
//! Every numeric field is always present; providers that omit a value yield `0`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::non_empty_string::NonEmptyString;

/// Provenance value stamped on every fact sourced from Nutritionix
pub const NUTRITIONIX_SOURCE: &str = "Nutritionix API";

/// A validated food description
///
/// Surrounding whitespace is removed at construction and the remaining
/// text is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionQuery(NonEmptyString);

impl NutritionQuery {
    /// Create a query from free text, trimming surrounding whitespace
    ///
    /// Returns `None` when nothing but whitespace is left.
    pub fn new(text: &str) -> Option<Self> {
        NonEmptyString::new(text.trim()).ok().map(Self)
    }

    /// The trimmed query text
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NutritionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Serving size as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Serving {
    /// Number of units in the serving
    #[schema(example = 2)]
    pub quantity: f64,
    /// Unit name, e.g. `large` or `cup`
    #[schema(example = "large")]
    pub unit: String,
    /// Total weight of the serving in grams
    pub weight_grams: f64,
}

/// Macronutrient breakdown in grams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[allow(missing_docs)]
pub struct Macronutrients {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub fiber_g: f64,
    pub sugars_g: f64,
}

/// Micronutrient breakdown in milligrams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[allow(missing_docs)]
pub struct Micronutrients {
    pub sodium_mg: f64,
    pub cholesterol_mg: f64,
    pub potassium_mg: f64,
}

/// Normalized nutrition facts for a single food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFact {
    /// Canonical food name assigned by the provider
    #[schema(example = "egg")]
    pub food: String,
    /// Serving the values below refer to
    pub serving: Serving,
    /// Energy in kilocalories
    #[schema(example = 155)]
    pub calories: f64,
    /// Macronutrients in grams
    pub macronutrients: Macronutrients,
    /// Micronutrients in milligrams
    pub micronutrients: Micronutrients,
    /// Provider the data was sourced from
    #[schema(example = "Nutritionix API")]
    pub source: String,
}
