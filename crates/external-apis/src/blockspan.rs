// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockspan API integration
//!
//! This module provides an implementation of the `CollectionSource` trait for
//! the Blockspan collections endpoint, which reports token totals and per-trait
//! rarity counts for an NFT contract.

use std::time::Duration;

use api_client::{ApiError, CollectionResult, CollectionSource, QueryInput};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use url::Url;

use crate::NonEmptyString;

/// Default Blockspan API host
pub const DEFAULT_BLOCKSPAN_BASE_URL: &str = "https://api.blockspan.com";

const API_KEY_HEADER: &str = "X-API-KEY";

/// Configuration for the Blockspan API client
#[derive(Debug, Clone)]
pub struct BlockspanConfig {
    /// Base URL for the Blockspan API, without the `/v1` prefix
    pub base_url: String,
    /// API key sent in the `X-API-KEY` header
    pub api_key: NonEmptyString,
    /// Request timeout in seconds; `None` leaves the transport default in place
    pub timeout_seconds: Option<u64>,
}

impl BlockspanConfig {
    /// Create a configuration for the public Blockspan host
    pub fn new(api_key: NonEmptyString) -> Self {
        Self {
            base_url: DEFAULT_BLOCKSPAN_BASE_URL.to_string(),
            api_key,
            timeout_seconds: None,
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bound every request by the given number of seconds
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// Blockspan API client implementation
#[derive(Debug)]
pub struct BlockspanClient {
    client: Client,
    base_url: Url,
    config: BlockspanConfig,
}

/// Errors specific to the Blockspan API client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum BlockspanError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout error
    #[error("Request timeout after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl From<BlockspanError> for ApiError {
    fn from(value: BlockspanError) -> Self {
        match value {
            BlockspanError::Http(error) => ApiError::Http {
                message: error.to_string(),
            },
            BlockspanError::Json(error) => ApiError::InvalidResponse {
                message: error.to_string(),
            },
            BlockspanError::ApiError { status, message } => ApiError::Status { status, message },
            BlockspanError::RateLimited => ApiError::RateLimitExceeded,
            BlockspanError::Unauthorized => ApiError::Authentication {
                message: value.to_string(),
            },
            BlockspanError::Config(message) => ApiError::Configuration { message },
            BlockspanError::Timeout { seconds } => ApiError::Timeout {
                timeout_seconds: seconds,
            },
        }
    }
}

impl BlockspanClient {
    /// Create a new Blockspan API client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed, the timeout is zero,
    /// or the HTTP client cannot be created
    pub fn new(config: BlockspanConfig) -> Result<Self, BlockspanError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| BlockspanError::Config(format!("invalid base URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(BlockspanError::Config(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        if config.timeout_seconds == Some(0) {
            return Err(BlockspanError::Config(
                "timeout must be greater than 0".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(concat!("nft-rarity-ranking/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(BlockspanError::Http)?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Build `<base>/v1/collections/contract/{address}?chain={chain}`
    ///
    /// The address is appended as a single percent-encoded path segment.
    pub fn collection_url(&self, query: &QueryInput) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v1", "collections", "contract"])
                .push(&query.contract_address);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("chain", query.blockchain.as_str());
        url
    }

    /// Fetch the collection summary for a contract address
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body is not a collection object
    pub async fn fetch_collection(
        &self,
        query: &QueryInput,
    ) -> Result<CollectionResult, BlockspanError> {
        let url = self.collection_url(query);

        debug!(
            %url,
            chain = query.blockchain.as_str(),
            "fetching collection from Blockspan"
        );

        let request = self
            .client
            .get(url)
            .header("accept", "application/json")
            .header(API_KEY_HEADER, self.config.api_key.as_str());

        let response = match self.config.timeout_seconds {
            Some(seconds) => timeout(Duration::from_secs(seconds), request.send())
                .await
                .map_err(|_| BlockspanError::Timeout { seconds })?,
            None => request.send().await,
        }
        .map_err(BlockspanError::Http)?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(BlockspanError::Http)?;
            let collection: CollectionResult = serde_json::from_slice(&body)?;
            info!(
                contract_address = %query.contract_address,
                chain = query.blockchain.as_str(),
                traits = collection.trait_rarity_counts.len(),
                "collection fetched"
            );
            return Ok(collection);
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BlockspanError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(BlockspanError::RateLimited),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                warn!("Blockspan API error: {} - {}", status.as_u16(), error_text);
                Err(BlockspanError::ApiError {
                    status: status.as_u16(),
                    message: error_text,
                })
            }
        }
    }
}

impl CollectionSource for BlockspanClient {
    async fn get_collection(&self, query: &QueryInput) -> Result<CollectionResult, ApiError> {
        self.fetch_collection(query).await.map_err(ApiError::from)
    }

    fn name(&self) -> &'static str {
        "blockspan"
    }
}

#[cfg(test)]
mod tests {
    use shared_types::Blockchain;

    use super::*;

    fn test_config() -> BlockspanConfig {
        BlockspanConfig::new(NonEmptyString::new("valid-api-key").unwrap())
    }

    #[test]
    fn client_creation_success() {
        assert!(BlockspanClient::new(test_config()).is_ok());
    }

    #[test]
    fn client_creation_rejects_unparseable_base_url() {
        let config = test_config().with_base_url("not a url");
        let result = BlockspanClient::new(config);
        assert!(matches!(result, Err(BlockspanError::Config(msg)) if msg.contains("invalid base URL")));
    }

    #[test]
    fn client_creation_rejects_zero_timeout() {
        let config = test_config().with_timeout_seconds(0);
        assert!(matches!(
            BlockspanClient::new(config),
            Err(BlockspanError::Config(_))
        ));
    }

    #[test]
    fn collection_url_layout() {
        let client = BlockspanClient::new(test_config()).unwrap();
        let query = QueryInput::new(
            "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
            Blockchain::EthMain,
        );

        assert_eq!(
            client.collection_url(&query).as_str(),
            "https://api.blockspan.com/v1/collections/contract/0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d?chain=eth-main"
        );
    }

    #[test]
    fn collection_url_keeps_base_path_and_encodes_address() {
        let config = test_config().with_base_url("http://localhost:8080/proxy/");
        let client = BlockspanClient::new(config).unwrap();
        let query = QueryInput::new("a/b c", Blockchain::BscMain);

        assert_eq!(
            client.collection_url(&query).as_str(),
            "http://localhost:8080/proxy/v1/collections/contract/a%2Fb%20c?chain=bsc-main"
        );
    }

    #[test]
    fn errors_convert_to_api_errors() {
        assert!(matches!(
            ApiError::from(BlockspanError::RateLimited),
            ApiError::RateLimitExceeded
        ));
        assert!(matches!(
            ApiError::from(BlockspanError::Unauthorized),
            ApiError::Authentication { .. }
        ));
        assert!(matches!(
            ApiError::from(BlockspanError::ApiError {
                status: 404,
                message: "missing".to_string()
            }),
            ApiError::Status { status: 404, .. }
        ));
        assert!(matches!(
            ApiError::from(BlockspanError::Timeout { seconds: 3 }),
            ApiError::Timeout { timeout_seconds: 3 }
        ));
    }

    #[test]
    fn client_name() {
        let client = BlockspanClient::new(test_config()).unwrap();
        assert_eq!(client.name(), "blockspan");
    }
}
