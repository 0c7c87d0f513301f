// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT Rarity Ranking Tool
//!
//! This crate drives a single collection query against Blockspan and renders
//! the per-trait rarity table.
//!
//! # Module Structure
//!
//! - [`config`]: Hierarchical configuration loading; the API key is never embedded
//! - [`error`]: Error types of the tool outside the query itself
//! - [`state`]: The single `QueryState` slot and its sequence tag
//! - [`controller`]: `RequestController`, the query state machine
//! - [`render`]: Text and JSON output of the query state
//! - [`runner`]: One query from start to rendered output, as the binary runs it

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod runner;
pub mod state;

pub use config::{BlockspanSettings, TimeoutSeconds, ToolConfig};
pub use controller::{QueryOutcome, RequestController};
pub use error::{ToolError, ToolResult};
pub use render::{OutputFormat, render_json, render_text};
pub use runner::{exit_status, run};
pub use shared_types::Blockchain;
pub use state::{QUERY_FAILED_MESSAGE, QuerySnapshot, QueryState};
