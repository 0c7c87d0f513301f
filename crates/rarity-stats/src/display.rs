// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Display guards for collection summary fields

use std::fmt;

use api_client::CountValue;
use serde::{Serialize, Serializer};

use crate::parse::parse_number;

/// Placeholder shown for missing summary values
pub const NOT_AVAILABLE: &str = "N/A";

/// A summary value as it should be shown to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayValue {
    /// A present, non-zero number
    Value(f64),
    /// Missing, zero or not a number
    NotAvailable,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for DisplayValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_f64(*value),
            Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Pass a summary number through unchanged, or replace it with `N/A`
///
/// Numeric strings are read as numbers first. Zero counts as missing here, so
/// an empty string shows as `N/A` too. Per-trait statistics keep their zeros.
pub fn check_data(value: Option<&CountValue>) -> DisplayValue {
    match value.and_then(parse_number) {
        Some(value) if !value.is_nan() && value != 0.0 => DisplayValue::Value(value),
        _ => DisplayValue::NotAvailable,
    }
}

/// Text field fallback: absent or empty text shows as `N/A`
pub fn text_or_na(value: Option<&str>) -> &str {
    value.filter(|text| !text.is_empty()).unwrap_or(NOT_AVAILABLE)
}
