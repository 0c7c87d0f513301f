// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! External API integrations for NFT collection metadata providers
//!
//! This crate provides implementations of the `CollectionSource` trait for
//! external services that report NFT collection statistics.
//!
//! # Architecture
//!
//! - **Client Implementations**: [`blockspan`] - Blockspan collections endpoint
//! - **Validation Utilities**: [`non_empty_string::NonEmptyString`] - ensures non-empty string constraints
//!
//! # Features
//!
//! - **Single Shot Requests**: one outbound call per lookup, no retries
//! - **Error Classification**: provider failures are mapped onto `api_client::ApiError`
//! - **Testing Support**: integration tests use wiremock for HTTP simulation

pub mod blockspan;
pub mod non_empty_string;

pub use blockspan::*;
pub use non_empty_string::NonEmptyString;
