// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Non-empty string validation
//!
//! [`NonEmptyString`] makes blank credentials and blank queries unrepresentable.
//! It is used for every secret loaded at startup and as the backing store of
//! [`NutritionQuery`](crate::NutritionQuery).
//!
//! ```rust
//! use shared_types::NonEmptyString;
//!
//! let app_id = NonEmptyString::new("a1b2c3").expect("valid app id");
//! assert_eq!(app_id.as_str(), "a1b2c3");
//!
//! assert!(NonEmptyString::new("").is_err());
//! assert!(NonEmptyString::new(" \t\n ").is_err());
//! ```

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Error message returned for blank input
const BLANK_MESSAGE: &str = "value cannot be empty or whitespace-only";

/// A string that contains at least one non-whitespace character
///
/// The content is kept as given; callers that need trimming do it before
/// construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyString(Box<str>);

impl NonEmptyString {
    /// Create a new `NonEmptyString`
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if `s` is empty or whitespace-only.
    pub fn new(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        if s.trim().is_empty() {
            Err(BLANK_MESSAGE.to_string())
        } else {
            Ok(Self(s.into_boxed_str()))
        }
    }

    /// Get a string slice of the contained value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Secrets are wrapped in this type, so the Debug output never shows the value.
impl fmt::Debug for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonEmptyString(<{} bytes>)", self.0.len())
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NonEmptyString {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NonEmptyString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NonEmptyString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_surrounding_whitespace() {
        let value = NonEmptyString::new(" token ").unwrap();
        assert_eq!(value.as_str(), " token ");
    }

    #[test]
    fn debug_hides_content() {
        let value = NonEmptyString::new("super-secret").unwrap();
        let debug = format!("{value:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("12 bytes"));
    }

    #[test]
    fn deserialize_rejects_blank() {
        let ok: Result<NonEmptyString, _> = serde_json::from_str("\"abc\"");
        assert_eq!(ok.unwrap().as_str(), "abc");

        let blank: Result<NonEmptyString, _> = serde_json::from_str("\"   \"");
        let err = blank.unwrap_err().to_string();
        assert!(err.contains("empty or whitespace-only"));
    }

    #[test]
    fn parses_from_str() {
        let parsed: NonEmptyString = "hello".parse().unwrap();
        assert_eq!(parsed.to_string(), "hello");
        assert!("".parse::<NonEmptyString>().is_err());
    }
}
