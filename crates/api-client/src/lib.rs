// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Collection source abstraction for NFT metadata providers
//!
//! This crate provides the seam between the request controller and the
//! concrete HTTP provider, along with the wire types of the collection
//! endpoint.
//!
//! # Core Abstractions
//!
//! - **`CollectionSource` Trait**: async lookup of a collection by contract address and chain
//! - **Error Handling**: `ApiError` classifies provider failures for diagnostics
//! - **Data Types**: [`QueryInput`], [`CollectionResult`], [`TraitRarity`], [`RarityCount`]

use thiserror::Error;

pub mod types;

pub use types::*;

/// Provider of collection-level NFT metadata
///
/// Implementations perform exactly one outbound request per call and never
/// retry.
pub trait CollectionSource: Send + Sync {
    /// Fetch collection metadata for the contract address on the given chain
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the provider answers
    /// with a non-success status, or the body cannot be decoded
    fn get_collection(
        &self,
        query: &QueryInput,
    ) -> impl Future<Output = Result<CollectionResult, ApiError>> + Send;

    /// Get the name/identifier of this source
    fn name(&self) -> &'static str;
}

/// Errors that can occur when fetching a collection
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Provider rejected the credential
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },
}
