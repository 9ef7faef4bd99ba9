// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Provider payload normalization
//!
//! Maps the first food of a [`FoodsPayload`] onto the fixed [`NutritionFact`]
//! schema. Missing or null numbers become `0`, so consumers never have to
//! check for absent fields.

use api_client::{FoodEntry, FoodsPayload};
use shared_types::{
    Macronutrients, Micronutrients, NUTRITIONIX_SOURCE, NutritionFact, Serving, ToolError,
};

const UNKNOWN_FOOD: &str = "Unknown";
const DEFAULT_SERVING_UNIT: &str = "serving";

/// Normalize a provider payload into a single nutrition fact
///
/// # Errors
///
/// Returns a `not_found` [`ToolError`] if the payload contains no foods.
pub fn normalize(payload: &FoodsPayload) -> Result<NutritionFact, ToolError> {
    let entry = payload
        .foods
        .first()
        .ok_or_else(|| ToolError::not_found("no nutrition data found for this query"))?;

    Ok(normalize_entry(entry))
}

fn normalize_entry(entry: &FoodEntry) -> NutritionFact {
    let num = |value: Option<f64>| value.unwrap_or_default();

    NutritionFact {
        food: entry
            .food_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_FOOD.to_string()),
        serving: Serving {
            quantity: num(entry.serving_qty),
            unit: entry
                .serving_unit
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVING_UNIT.to_string()),
            weight_grams: num(entry.serving_weight_grams),
        },
        calories: num(entry.nf_calories),
        macronutrients: Macronutrients {
            protein_g: num(entry.nf_protein),
            fat_g: num(entry.nf_total_fat),
            carbs_g: num(entry.nf_total_carbohydrate),
            fiber_g: num(entry.nf_dietary_fiber),
            sugars_g: num(entry.nf_sugars),
        },
        micronutrients: Micronutrients {
            sodium_mg: num(entry.nf_sodium),
            cholesterol_mg: num(entry.nf_cholesterol),
            potassium_mg: num(entry.nf_potassium),
        },
        source: NUTRITIONIX_SOURCE.to_string(),
    }
}
