// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Query state management module
//!
//! A query is always in exactly one state. Transitions replace the whole value,
//! so a loading flag and an error can never be observed together.

use api_client::CollectionResult;

/// Message shown for every failed query, whatever the cause
pub const QUERY_FAILED_MESSAGE: &str = "No NFTs found on this chain in this contract address!";

/// State of the most recent query
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryState {
    /// No query has been started
    #[default]
    Idle,
    /// A query is in flight; any previous result has been cleared
    Loading,
    /// The query settled with a collection
    Success(CollectionResult),
    /// The query settled with an error
    Failure(String),
}

impl QueryState {
    /// Failure state carrying the fixed user-facing message
    pub fn failed() -> Self {
        Self::Failure(QUERY_FAILED_MESSAGE.to_string())
    }

    /// Whether a query is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The collection of a successful query
    pub fn result(&self) -> Option<&CollectionResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The failure message of a failed query
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Query state tagged with the sequence number of the query that owns it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySnapshot {
    /// Sequence number of the latest started query, 0 before the first
    pub sequence: u64,
    /// Current state
    pub state: QueryState,
}
