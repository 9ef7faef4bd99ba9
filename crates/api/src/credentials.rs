// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Process credentials
//!
//! Loaded once at startup from unprefixed environment variables and shared
//! read-only afterwards. All four values are required.
//!
//! | Variable              | Field                |
//! |-----------------------|----------------------|
//! | `AUTH_TOKEN`          | `server_auth_token`  |
//! | `MY_NUMBER`           | `validation_number`  |
//! | `NUTRITIONIX_APP_ID`  | `provider_app_id`    |
//! | `NUTRITIONIX_APP_KEY` | `provider_app_key`   |

use config::{Config, ConfigError, Environment as ConfigEnv};
use serde::Deserialize;
use shared_types::NonEmptyString;

use crate::error::{ServerError, ServerResult};

/// Immutable credential context
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Bearer token callers must present
    #[serde(rename = "auth_token")]
    pub server_auth_token: NonEmptyString,
    /// Operator identity returned by the `validate` tool
    #[serde(rename = "my_number")]
    pub validation_number: NonEmptyString,
    /// Nutritionix application id
    #[serde(rename = "nutritionix_app_id")]
    pub provider_app_id: NonEmptyString,
    /// Nutritionix application key
    #[serde(rename = "nutritionix_app_key")]
    pub provider_app_key: NonEmptyString,
}

impl Credentials {
    /// Build credentials from explicit values
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` naming the first blank value.
    pub fn new(
        server_auth_token: impl Into<String>,
        validation_number: impl Into<String>,
        provider_app_id: impl Into<String>,
        provider_app_key: impl Into<String>,
    ) -> ServerResult<Self> {
        let field = |name: &str, value: String| {
            NonEmptyString::new(value).map_err(|e| ServerError::Config {
                message: format!("{name}: {e}"),
            })
        };

        Ok(Self {
            server_auth_token: field("AUTH_TOKEN", server_auth_token.into())?,
            validation_number: field("MY_NUMBER", validation_number.into())?,
            provider_app_id: field("NUTRITIONIX_APP_ID", provider_app_id.into())?,
            provider_app_key: field("NUTRITIONIX_APP_KEY", provider_app_key.into())?,
        })
    }

    /// Load credentials from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if a variable is missing or blank.
    pub fn from_env() -> ServerResult<Self> {
        Config::builder()
            .add_source(ConfigEnv::default().try_parsing(false))
            .build()
            .and_then(Self::from_config)
            .map_err(|e| ServerError::Config {
                message: format!("failed to load credentials: {e}"),
            })
    }

    /// Deserialize credentials from a built configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a key is missing or blank.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values() {
        let credentials = Credentials::new("token", "919876543210", "app-id", "app-key").unwrap();
        assert_eq!(credentials.server_auth_token.as_str(), "token");
        assert_eq!(credentials.validation_number.as_str(), "919876543210");
        assert_eq!(credentials.provider_app_id.as_str(), "app-id");
        assert_eq!(credentials.provider_app_key.as_str(), "app-key");
    }

    #[test]
    fn blank_value_is_named() {
        let error = Credentials::new("token", "  ", "app-id", "app-key").unwrap_err();
        assert!(error.to_string().contains("MY_NUMBER"));
    }

    #[test]
    fn debug_does_not_leak_secrets() {
        let credentials = Credentials::new("s3cret-token", "42", "app-id", "app-key").unwrap();
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("s3cret-token"));
        assert!(!debug.contains("app-key"));
    }

    #[test]
    fn from_config_reads_env_style_keys() {
        let config = Config::builder()
            .set_override("auth_token", "token")
            .unwrap()
            .set_override("my_number", "919876543210")
            .unwrap()
            .set_override("nutritionix_app_id", "app-id")
            .unwrap()
            .set_override("nutritionix_app_key", "app-key")
            .unwrap()
            .set_override("path", "/usr/bin")
            .unwrap()
            .build()
            .unwrap();

        let credentials = Credentials::from_config(config).unwrap();
        assert_eq!(credentials.validation_number.as_str(), "919876543210");
    }

    #[test]
    fn from_config_requires_every_key() {
        let config = Config::builder()
            .set_override("auth_token", "token")
            .unwrap()
            .build()
            .unwrap();

        let error = Credentials::from_config(config).unwrap_err();
        assert!(error.to_string().contains("my_number"));
    }
}
