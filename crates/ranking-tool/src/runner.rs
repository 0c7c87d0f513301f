// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! One-shot query runner behind the command line tool

use std::io::Write;

use api_client::{CollectionSource, QueryInput};
use tracing::debug;

use crate::{
    controller::{QueryOutcome, RequestController},
    error::ToolResult,
    render::{OutputFormat, render_json, render_text},
    state::QueryState,
};

/// Run a single query and write its rendering
///
/// In text format the loading line goes to `progress` before the request
/// settles. JSON output only ever carries the settled state, so nothing is
/// written to `progress`. Returns the settled state.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized
pub async fn run<S, O, P>(
    controller: &RequestController<S>,
    input: QueryInput,
    format: OutputFormat,
    output: &mut O,
    progress: &mut P,
) -> ToolResult<QueryState>
where
    S: CollectionSource + 'static,
    O: Write,
    P: Write,
{
    let pending = controller.run_query(input);
    if format == OutputFormat::Text {
        progress.write_all(render_text(&controller.state()).as_bytes())?;
        progress.flush()?;
    }

    if let QueryOutcome::Superseded { sequence } = pending.await {
        debug!(sequence, "query superseded");
    }

    let state = controller.state();
    match format {
        OutputFormat::Text => output.write_all(render_text(&state).as_bytes())?,
        OutputFormat::Json => writeln!(output, "{}", render_json(&state)?)?,
    }
    output.flush()?;

    Ok(state)
}

/// Process exit status for a settled query: 1 on failure, 0 otherwise
pub fn exit_status(state: &QueryState) -> u8 {
    u8::from(matches!(state, QueryState::Failure(_)))
}

#[cfg(test)]
mod tests {
    use api_client::{ApiError, CollectionResult, CountValue};
    use shared_types::Blockchain;

    use super::*;
    use crate::render::FAILURE_HINT;

    struct FixedSource(Option<CollectionResult>);

    impl CollectionSource for FixedSource {
        async fn get_collection(&self, _query: &QueryInput) -> Result<CollectionResult, ApiError> {
            self.0.clone().ok_or_else(|| ApiError::Status {
                status: 404,
                message: "Collection not found".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    async fn run_with(
        collection: Option<CollectionResult>,
        format: OutputFormat,
    ) -> (QueryState, String, String) {
        let controller = RequestController::new(FixedSource(collection));
        let mut output = Vec::new();
        let mut progress = Vec::new();

        let state = run(
            &controller,
            QueryInput::new("0xabc", Blockchain::EthMain),
            format,
            &mut output,
            &mut progress,
        )
        .await
        .unwrap();

        (
            state,
            String::from_utf8(output).unwrap(),
            String::from_utf8(progress).unwrap(),
        )
    }

    #[tokio::test]
    async fn failed_query_exits_non_zero() {
        let (state, output, progress) = run_with(None, OutputFormat::Text).await;

        assert_eq!(state, QueryState::failed());
        assert_eq!(exit_status(&state), 1);
        assert_eq!(progress, "Loading...\n");
        assert!(output.starts_with(FAILURE_HINT));
    }

    #[tokio::test]
    async fn successful_text_query_exits_zero() {
        let collection = CollectionResult {
            token_type: Some("erc721".to_string()),
            total_tokens: Some(CountValue::from("10000")),
            ..Default::default()
        };
        let (state, output, progress) = run_with(Some(collection), OutputFormat::Text).await;

        assert_eq!(exit_status(&state), 0);
        assert_eq!(progress, "Loading...\n");
        assert_eq!(
            output,
            "Token Type: erc721 | Total Tokens: 10000 | Total Transfers: N/A\n"
        );
    }

    #[tokio::test]
    async fn json_format_writes_no_progress() {
        let (state, output, progress) =
            run_with(Some(CollectionResult::default()), OutputFormat::Json).await;

        assert_eq!(exit_status(&state), 0);
        assert!(progress.is_empty());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "success");

        let (state, output, progress) = run_with(None, OutputFormat::Json).await;
        assert_eq!(exit_status(&state), 1);
        assert!(progress.is_empty());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "failure");
    }
}
