// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! External nutrition data provider integrations
//!
//! This crate provides the `NutritionProvider` implementation for Nutritionix and
//! the pure normalization step that turns its raw payload into a [`NutritionFact`].
//!
//! # Architecture
//!
//! - **Client Implementation**: [`nutritionix`] - one bounded request per lookup, no retries
//! - **Normalization**: [`normalizer`] - first matched food onto the fixed output schema
//!
//! [`NutritionFact`]: shared_types::NutritionFact

pub mod normalizer;
pub mod nutritionix;

pub use normalizer::normalize;
pub use nutritionix::*;
