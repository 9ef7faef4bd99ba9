// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the nutrition analyzer service
//!
//! This crate provides the normalized output schema and the error taxonomy
//! that are shared across the workspace, avoiding circular dependencies
//! between the provider integrations and the server.

pub mod non_empty_string;
pub mod nutrition;
pub mod tool_error;

pub use non_empty_string::NonEmptyString;
pub use nutrition::{
    Macronutrients, Micronutrients, NUTRITIONIX_SOURCE, NutritionFact, NutritionQuery, Serving,
};
pub use tool_error::{ErrorKind, ToolError};
