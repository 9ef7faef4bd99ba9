// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Health status reported by providers

use serde::{Deserialize, Serialize};

/// Health status of a provider client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum HealthStatus {
    /// Provider is configured and usable
    Up,
    /// Provider is usable but something is off
    Degraded { reason: String },
    /// Provider cannot serve requests
    Down { reason: String },
}
