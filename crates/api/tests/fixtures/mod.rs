// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures for end-to-end testing
//!
//! This module provides canned Nutritionix responses and a helper that starts
//! the real server against a mock provider.

pub mod nutritionix;
pub mod server;

pub use nutritionix::*;
pub use server::*;
