// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockchain identifiers accepted by the collection endpoint
//!
//! The set is closed: the Blockspan collection endpoint is only ever queried
//! with one of these network names in its `chain` parameter.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported blockchain networks, named by their Blockspan wire identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Blockchain {
    /// Ethereum mainnet (`eth-main`)
    #[default]
    EthMain,
    /// Arbitrum One (`arbitrum-main`)
    ArbitrumMain,
    /// Optimism mainnet (`optimism-main`)
    OptimismMain,
    /// Polygon PoS mainnet (`poly-main`)
    PolyMain,
    /// BNB Smart Chain mainnet (`bsc-main`)
    BscMain,
    /// Ethereum Goerli testnet (`eth-goerli`)
    EthGoerli,
}

impl Blockchain {
    /// Returns the identifier sent in the `chain` query parameter
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EthMain => "eth-main",
            Self::ArbitrumMain => "arbitrum-main",
            Self::OptimismMain => "optimism-main",
            Self::PolyMain => "poly-main",
            Self::BscMain => "bsc-main",
            Self::EthGoerli => "eth-goerli",
        }
    }

    /// Returns every selectable blockchain in display order
    pub const fn all() -> &'static [Self] {
        &[
            Self::EthMain,
            Self::ArbitrumMain,
            Self::OptimismMain,
            Self::PolyMain,
            Self::BscMain,
            Self::EthGoerli,
        ]
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Blockchain {
    type Err = BlockchainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|chain| chain.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BlockchainParseError(s.to_string()))
    }
}

impl Serialize for Blockchain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Blockchain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned when a blockchain identifier is not in the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unsupported blockchain: {0}. Supported values are: eth-main, arbitrum-main, optimism-main, poly-main, bsc-main, eth-goerli"
)]
pub struct BlockchainParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_identifiers_round_trip_through_from_str() {
        for &chain in Blockchain::all() {
            assert_eq!(chain.as_str().parse::<Blockchain>().unwrap(), chain);
            assert_eq!(chain.to_string(), chain.as_str());
        }
    }

    #[test]
    fn parsing_ignores_case_and_surrounding_whitespace() {
        assert_eq!(
            " Poly-Main ".parse::<Blockchain>().unwrap(),
            Blockchain::PolyMain
        );
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "solana-main".parse::<Blockchain>().unwrap_err();
        assert_eq!(err, BlockchainParseError("solana-main".to_string()));
        assert!(err.to_string().contains("eth-goerli"));
    }

    #[test]
    fn default_matches_form_selection() {
        assert_eq!(Blockchain::default(), Blockchain::EthMain);
    }

    #[test]
    fn serde_uses_wire_identifier() {
        let json = serde_json::to_string(&Blockchain::BscMain).unwrap();
        assert_eq!(json, "\"bsc-main\"");

        let parsed: Blockchain = serde_json::from_str("\"optimism-main\"").unwrap();
        assert_eq!(parsed, Blockchain::OptimismMain);

        assert!(serde_json::from_str::<Blockchain>("\"eth\"").is_err());
    }
}
