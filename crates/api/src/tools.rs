// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Tool catalogue shared by the REST and MCP surfaces

use std::fmt;

use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::validator::FOOD_QUERY_FIELD;

/// Public name of the service
pub const SERVICE_NAME: &str = "NutritiWisdom";

/// Public description of the service
pub const SERVICE_DESCRIPTION: &str =
    "A MCP server which gives you nutritional information of various food items";

/// Tools exposed by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Nutrition facts for a free text food description
    AnalyzeNutrition,
    /// Operator validation number
    Validate,
    /// Service name and description
    About,
}

impl Tool {
    /// Every tool, in listing order
    pub const ALL: [Tool; 3] = [Tool::AnalyzeNutrition, Tool::Validate, Tool::About];

    /// Look a tool up by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Wire name of the tool
    pub fn name(self) -> &'static str {
        match self {
            Tool::AnalyzeNutrition => "analyze_nutrition",
            Tool::Validate => "validate",
            Tool::About => "about",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Tool::AnalyzeNutrition => {
                "Get detailed nutrition facts for food items. \
                 Use when the user asks about calories or nutrients in food."
            }
            Tool::Validate => "Return the validation number of the server operator.",
            Tool::About => "Describe this server.",
        }
    }

    /// JSON schema of the tool arguments
    pub fn input_schema(self) -> Value {
        match self {
            Tool::AnalyzeNutrition => json!({
                "type": "object",
                "properties": {
                    FOOD_QUERY_FIELD: {
                        "type": "string",
                        "description": "Food item and quantity (e.g. '1 banana', '100g chicken breast')"
                    }
                },
                "required": [FOOD_QUERY_FIELD]
            }),
            Tool::Validate | Tool::About => json!({
                "type": "object",
                "properties": {}
            }),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of the `about` tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct About {
    /// Service name
    #[schema(example = "NutritiWisdom")]
    pub name: &'static str,
    /// Service description
    pub description: &'static str,
}

impl About {
    /// Description of this service
    pub const fn service() -> Self {
        Self {
            name: SERVICE_NAME,
            description: SERVICE_DESCRIPTION,
        }
    }
}
