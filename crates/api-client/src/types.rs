// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the collection endpoint

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use shared_types::Blockchain;

/// User supplied parameters of a collection query
///
/// The contract address is passed through untouched; the provider is the only
/// judge of whether it names a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    /// Contract address of the NFT collection
    pub contract_address: String,
    /// Network the address is resolved against
    pub blockchain: Blockchain,
}

impl QueryInput {
    /// Create a query for the given address and chain
    pub fn new(contract_address: impl Into<String>, blockchain: Blockchain) -> Self {
        Self {
            contract_address: contract_address.into(),
            blockchain,
        }
    }
}

/// Collection summary returned by the provider
///
/// Only the fields below are interpreted. Everything else in the body is kept
/// in `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionResult {
    /// Token standard of the collection (`erc721`, `erc1155`, ...)
    #[serde(default)]
    pub token_type: Option<String>,
    /// Number of tokens minted in the collection, as a number or numeric string
    #[serde(default)]
    pub total_tokens: Option<CountValue>,
    /// Number of transfers recorded for the collection, as a number or numeric string
    #[serde(default)]
    pub total_transfers: Option<CountValue>,
    /// Rarity counts grouped by trait
    #[serde(default, deserialize_with = "null_as_default")]
    pub trait_rarity_counts: Vec<TraitRarity>,
    /// Fields of the response that are not interpreted
    #[serde(flatten)]
    pub additional_data: HashMap<String, serde_json::Value>,
}

/// Occurrence counts of every value of one trait
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitRarity {
    /// Trait name, e.g. `Background`
    #[serde(rename = "trait")]
    pub trait_name: String,
    /// One entry per distinct value of the trait
    #[serde(default, deserialize_with = "null_as_default")]
    pub rarity_counts: Vec<RarityCount>,
}

/// Occurrence count of a single trait value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RarityCount {
    /// Number of tokens carrying the value
    #[serde(default)]
    pub count: CountValue,
}

impl RarityCount {
    /// Create a count from any JSON-compatible representation
    pub fn new(count: impl Into<CountValue>) -> Self {
        Self {
            count: count.into(),
        }
    }
}

/// Raw count or total as it appears on the wire
///
/// The provider sends counts as numeric strings, but plain numbers are
/// accepted as well. Anything else is preserved so it can be reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountValue {
    /// JSON number
    Number(serde_json::Number),
    /// JSON string, expected to hold an integer
    Text(String),
    /// Any other JSON value, including `null`
    Other(serde_json::Value),
}

impl Default for CountValue {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl From<&str> for CountValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CountValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for CountValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for CountValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl std::fmt::Display for CountValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
