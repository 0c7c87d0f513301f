// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Collection report: summary line plus one statistics row per trait

use api_client::{CollectionResult, TraitRarity};
use serde::Serialize;
use tracing::warn;

use crate::{
    display::{DisplayValue, check_data, text_or_na},
    stats::{PartialStats, RarityStats, partial_count_stats, rarity_count_stats},
};

/// Cell text for statistics that could not be computed
pub const NOT_A_NUMBER: &str = "NaN";

/// Headline figures of a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSummary {
    /// Token standard, or `N/A`
    pub token_type: String,
    /// Total tokens through [`check_data`]
    pub total_tokens: DisplayValue,
    /// Total transfers through [`check_data`]
    pub total_transfers: DisplayValue,
}

/// Statistics cell contents of a trait row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowStats {
    /// All counts were integers
    Computed(RarityStats),
    /// At least one count was not an integer: no average, bounds where known
    Partial(PartialStats),
}

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitRow {
    /// Trait name
    #[serde(rename = "trait")]
    pub trait_name: String,
    /// Number of distinct values of the trait
    pub unique_values: usize,
    /// Rarity statistics of the trait
    pub stats: RowStats,
}

impl TraitRow {
    /// Build the row of a single trait
    pub fn from_trait(rarity: &TraitRarity) -> Self {
        let stats = match rarity_count_stats(&rarity.rarity_counts) {
            Ok(stats) => RowStats::Computed(stats),
            Err(error) => {
                warn!(trait_name = %rarity.trait_name, %error, "rarity average unavailable");
                RowStats::Partial(partial_count_stats(&rarity.rarity_counts))
            }
        };

        Self {
            trait_name: rarity.trait_name.clone(),
            unique_values: rarity.rarity_counts.len(),
            stats,
        }
    }

    /// Average rarity count cell
    pub fn average_cell(&self) -> String {
        match &self.stats {
            RowStats::Computed(stats) => stats.average_display(),
            RowStats::Partial(_) => NOT_A_NUMBER.to_string(),
        }
    }

    /// Lowest rarity count cell
    pub fn min_cell(&self) -> String {
        match &self.stats {
            RowStats::Computed(stats) => stats.min.to_string(),
            RowStats::Partial(bounds) => bounds
                .min
                .map_or_else(|| NOT_A_NUMBER.to_string(), |min| min.to_string()),
        }
    }

    /// Highest rarity count cell
    pub fn max_cell(&self) -> String {
        match &self.stats {
            RowStats::Computed(stats) => stats.max.to_string(),
            RowStats::Partial(bounds) => bounds.max.to_string(),
        }
    }
}

/// Everything shown for a successful query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionReport {
    /// Summary line
    pub summary: CollectionSummary,
    /// Trait rows in provider order
    pub rows: Vec<TraitRow>,
}

impl CollectionReport {
    /// Build the report of a collection, computing statistics once per trait
    pub fn from_result(result: &CollectionResult) -> Self {
        let summary = CollectionSummary {
            token_type: text_or_na(result.token_type.as_deref()).to_string(),
            total_tokens: check_data(result.total_tokens.as_ref()),
            total_transfers: check_data(result.total_transfers.as_ref()),
        };

        let rows = result
            .trait_rarity_counts
            .iter()
            .map(TraitRow::from_trait)
            .collect();

        Self { summary, rows }
    }
}

#[cfg(test)]
mod tests {
    use api_client::{CountValue, RarityCount};

    use super::*;

    fn trait_rarity(name: &str, counts: &[&str]) -> TraitRarity {
        TraitRarity {
            trait_name: name.to_string(),
            rarity_counts: counts.iter().map(|&c| RarityCount::new(c)).collect(),
        }
    }

    #[test]
    fn report_of_full_collection() {
        let result = CollectionResult {
            token_type: Some("erc721".to_string()),
            total_tokens: Some(CountValue::from("10000")),
            total_transfers: Some(CountValue::from(0_u64)),
            trait_rarity_counts: vec![
                trait_rarity("Hat", &["5", "10", "15"]),
                trait_rarity("Eyes", &[]),
            ],
            ..Default::default()
        };

        let report = CollectionReport::from_result(&result);

        assert_eq!(report.summary.token_type, "erc721");
        assert_eq!(report.summary.total_tokens, DisplayValue::Value(10000.0));
        assert_eq!(report.summary.total_transfers, DisplayValue::NotAvailable);

        let hat = &report.rows[0];
        assert_eq!(hat.trait_name, "Hat");
        assert_eq!(hat.unique_values, 3);
        assert_eq!(
            (hat.average_cell(), hat.min_cell(), hat.max_cell()),
            ("10.0".to_string(), "5".to_string(), "15".to_string())
        );

        let eyes = &report.rows[1];
        assert_eq!(eyes.unique_values, 0);
        assert_eq!(
            (eyes.average_cell(), eyes.min_cell(), eyes.max_cell()),
            ("0".to_string(), "0".to_string(), "0".to_string())
        );
    }

    #[test]
    fn missing_summary_fields_show_placeholder() {
        let report = CollectionReport::from_result(&CollectionResult::default());
        assert_eq!(report.summary.token_type, "N/A");
        assert_eq!(report.summary.total_tokens, DisplayValue::NotAvailable);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn unparseable_counts_lose_the_average() {
        let row = TraitRow::from_trait(&trait_rarity("Fur", &["3", "lots", "9"]));
        assert_eq!(
            row.stats,
            RowStats::Partial(PartialStats {
                min: Some(3),
                max: 9
            })
        );
        assert_eq!(row.unique_values, 3);
        assert_eq!(row.average_cell(), "NaN");
        assert_eq!(row.min_cell(), "3");
        assert_eq!(row.max_cell(), "9");

        let row = TraitRow::from_trait(&trait_rarity("Fur", &["lots", "3"]));
        assert_eq!(
            (row.average_cell(), row.min_cell(), row.max_cell()),
            ("NaN".to_string(), "NaN".to_string(), "3".to_string())
        );
    }

    #[test]
    fn report_serializes_to_flat_json() {
        let result = CollectionResult {
            trait_rarity_counts: vec![trait_rarity("Hat", &["2", "4"])],
            ..Default::default()
        };
        let value = serde_json::to_value(CollectionReport::from_result(&result)).unwrap();

        assert_eq!(value["summary"]["total_tokens"], "N/A");
        assert_eq!(value["rows"][0]["trait"], "Hat");
        assert_eq!(value["rows"][0]["unique_values"], 2);
        assert_eq!(value["rows"][0]["stats"]["average"], 3.0);
        assert_eq!(value["rows"][0]["stats"]["min"], 2);
        assert_eq!(value["rows"][0]["stats"]["max"], 4);
    }
}
