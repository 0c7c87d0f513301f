// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Plain-text and JSON rendering of the query state

use std::fmt;

use rarity_stats::CollectionReport;
use serde_json::json;

use crate::state::QueryState;

/// Line shown while a query is in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Hint shown above the failure message
pub const FAILURE_HINT: &str = "Error: verify chain and contract address are valid";

const TABLE_HEADERS: [&str; 5] = [
    "Traits",
    "Unique Values",
    "Average Rarity Count",
    "Lowest Rarity Count",
    "Highest Rarity Count",
];

/// Output format of the command line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Summary line and aligned table
    #[default]
    Text,
    /// Report as JSON
    Json,
}

/// Render the state as text
pub fn render_text(state: &QueryState) -> String {
    match state {
        QueryState::Idle => String::new(),
        QueryState::Loading => format!("{LOADING_MESSAGE}\n"),
        QueryState::Failure(message) => format!("{FAILURE_HINT}\n{message}\n"),
        QueryState::Success(result) => {
            TextReport(&CollectionReport::from_result(result)).to_string()
        }
    }
}

/// Render the state as JSON
///
/// # Errors
///
/// Returns an error if the report cannot be serialized
pub fn render_json(state: &QueryState) -> Result<String, serde_json::Error> {
    let value = match state {
        QueryState::Idle => json!({ "status": "idle" }),
        QueryState::Loading => json!({ "status": "loading" }),
        QueryState::Failure(message) => json!({ "status": "failure", "message": message }),
        QueryState::Success(result) => json!({
            "status": "success",
            "report": CollectionReport::from_result(result),
        }),
    };
    serde_json::to_string_pretty(&value)
}

/// Text layout of a collection report
#[derive(Debug)]
pub struct TextReport<'a>(pub &'a CollectionReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.0.summary;
        writeln!(
            f,
            "Token Type: {} | Total Tokens: {} | Total Transfers: {}",
            summary.token_type, summary.total_tokens, summary.total_transfers
        )?;

        if self.0.rows.is_empty() {
            return Ok(());
        }

        let rows: Vec<[String; 5]> = self
            .0
            .rows
            .iter()
            .map(|row| {
                [
                    row.trait_name.clone(),
                    row.unique_values.to_string(),
                    row.average_cell(),
                    row.min_cell(),
                    row.max_cell(),
                ]
            })
            .collect();

        let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(f)?;
        write_line(f, &TABLE_HEADERS, &widths)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_line(f, &rule, &widths)?;
        for row in &rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S],
    widths: &[usize; 5],
) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}
