// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Rarity statistics over the value counts of one trait

use api_client::RarityCount;
use serde::Serialize;
use thiserror::Error;

use crate::parse::parse_count;

/// Average, lowest and highest occurrence count of a trait's values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RarityStats {
    /// Mean count rounded to one fractional digit, `0` for an empty trait
    pub average: f64,
    /// Lowest count
    pub min: i64,
    /// Highest count
    pub max: i64,
    /// Number of counts the statistics were computed over
    pub samples: usize,
}

impl RarityStats {
    /// Statistics of a trait without any values
    pub const EMPTY: Self = Self {
        average: 0.0,
        min: 0,
        max: 0,
        samples: 0,
    };

    /// Average formatted for display: `0` when empty, one decimal otherwise
    pub fn average_display(&self) -> String {
        if self.samples == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average)
        }
    }
}

/// Errors produced while computing rarity statistics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RarityError {
    /// A count could not be read as an integer
    #[error("count #{index} is not an integer: {value}")]
    UnparseableCount {
        /// Position of the count within the trait
        index: usize,
        /// Count as received
        value: String,
    },
}

/// Compute average, min and max over a trait's value counts
///
/// `max` starts at 0 and only grows. `min` starts at the sentinel 0, and a
/// count replaces it when smaller or while it still holds 0, so zero counts
/// never stick as the minimum once a non-zero count follows. The average is the
/// exact ratio rounded half away from zero to tenths.
///
/// # Errors
///
/// Returns [`RarityError::UnparseableCount`] for the first count that does not
/// read as an integer
pub fn rarity_count_stats(counts: &[RarityCount]) -> Result<RarityStats, RarityError> {
    if counts.is_empty() {
        return Ok(RarityStats::EMPTY);
    }

    let mut total: i128 = 0;
    let mut min: i64 = 0;
    let mut max: i64 = 0;

    for (index, rarity) in counts.iter().enumerate() {
        let value = parse_count(&rarity.count).ok_or_else(|| RarityError::UnparseableCount {
            index,
            value: rarity.count.to_string(),
        })?;

        total += i128::from(value);
        if max < value {
            max = value;
        }
        if min > value || min == 0 {
            min = value;
        }
    }

    Ok(RarityStats {
        average: average_to_tenths(total, counts.len()),
        min,
        max,
        samples: counts.len(),
    })
}

/// Bounds that survive unparseable counts
///
/// An unparseable count is not a number, so it never raises `max`. It only
/// takes over `min` while `min` still holds the sentinel 0, and after that
/// nothing replaces it. `None` marks such a lost minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartialStats {
    /// Lowest count, unless an unparseable count took the sentinel's place
    pub min: Option<i64>,
    /// Highest parseable count, at least 0
    pub max: i64,
}

/// Compute the bounds of counts that include unparseable ones
///
/// Follows the same update rules as [`rarity_count_stats`].
pub fn partial_count_stats(counts: &[RarityCount]) -> PartialStats {
    let mut min = Some(0);
    let mut max = 0;

    for rarity in counts {
        match parse_count(&rarity.count) {
            Some(value) => {
                if max < value {
                    max = value;
                }
                if let Some(current) = min
                    && (current > value || current == 0)
                {
                    min = Some(value);
                }
            }
            None if min == Some(0) => min = None,
            None => {}
        }
    }

    PartialStats { min, max }
}

#[allow(clippy::cast_precision_loss)]
fn average_to_tenths(total: i128, len: usize) -> f64 {
    let len = i128::try_from(len).unwrap_or(i128::MAX);
    let scaled = total * 10;
    let mut tenths = scaled / len;
    let remainder = scaled % len;
    if 2 * remainder.abs() >= len {
        tenths += scaled.signum();
    }
    tenths as f64 / 10.0
}
