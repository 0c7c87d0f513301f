// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Rarity statistics for NFT collections
//!
//! Pure functions over the collection payload returned by a
//! `CollectionSource`:
//!
//! - [`stats::rarity_count_stats`]: average/min/max of one trait's value counts
//! - [`display::check_data`]: `N/A` guard for summary numbers
//! - [`report::CollectionReport`]: summary line plus a row per trait

pub mod display;
pub mod parse;
pub mod report;
pub mod stats;

pub use display::{DisplayValue, NOT_AVAILABLE, check_data, text_or_na};
pub use parse::{parse_count, parse_number};
pub use report::{CollectionReport, CollectionSummary, NOT_A_NUMBER, RowStats, TraitRow};
pub use stats::{PartialStats, RarityError, RarityStats, partial_count_stats, rarity_count_stats};
