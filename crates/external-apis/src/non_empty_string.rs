// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Non-empty string validation utilities
//!
//! [`NonEmptyString`] guarantees at construction that a value holds at least
//! one non-whitespace character. Credentials use it so that a blank API key is
//! rejected while configuration is loaded instead of on the first request.
//!
//! ```rust
//! use external_apis::NonEmptyString;
//!
//! let api_key = NonEmptyString::new("sk-1234567890").expect("valid API key");
//! assert_eq!(api_key.as_str(), "sk-1234567890");
//!
//! assert!(NonEmptyString::new("").is_err());
//! assert!(NonEmptyString::new("   \t\n  ").is_err());
//! ```

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-empty string wrapper that ensures validity at construction
///
/// Leading and trailing whitespace is preserved; only blank input is rejected.
#[derive(Clone, PartialEq, Eq)]
pub struct NonEmptyString(Box<str>);

impl NonEmptyString {
    /// Create a new `NonEmptyString` from any string-like input
    ///
    /// # Errors
    ///
    /// Returns a descriptive message if the string is empty or whitespace-only
    pub fn new(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        if s.trim().is_empty() {
            Err("String cannot be empty or whitespace-only".to_string())
        } else {
            Ok(NonEmptyString(s.into_boxed_str()))
        }
    }

    /// Get a string slice of the contained value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Values are mostly credentials; keep them out of debug logs.
impl fmt::Debug for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonEmptyString(<{} chars>)", self.0.chars().count())
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
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
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
