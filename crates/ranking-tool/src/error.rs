// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! Errors of the ranking tool outside the query itself. A failed query is not
//! an error at this level: it is the `Failure` query state.

use external_apis::BlockspanError;
use thiserror::Error;

/// Error types for tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// The HTTP client could not be built
    #[error("Failed to create Blockspan client: {source}")]
    Client {
        /// Underlying client error
        #[from]
        source: BlockspanError,
    },

    /// Output could not be serialized
    #[error("Failed to render output: {source}")]
    Render {
        /// Underlying serialization error
        #[from]
        source: serde_json::Error,
    },

    /// Output could not be written
    #[error("Failed to write output: {source}")]
    Output {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;
