// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! End to end query flow against a mocked Blockspan API

use std::time::Duration;

use api_client::QueryInput;
use external_apis::{BlockspanClient, BlockspanConfig, NonEmptyString};
use ranking_tool::{
    Blockchain, QUERY_FAILED_MESSAGE, QueryOutcome, QueryState, RequestController, render_text,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const API_KEY: &str = "flow-test-key";
const CONTRACT: &str = "0x60e4d786628fea6478f785a6d7e704777c86a7c6";

fn controller(mock_server: &MockServer) -> RequestController<BlockspanClient> {
    let config = BlockspanConfig::new(NonEmptyString::new(API_KEY).unwrap())
        .with_base_url(mock_server.uri());
    RequestController::new(BlockspanClient::new(config).unwrap())
}

fn collection_body(token_type: &str) -> serde_json::Value {
    json!({
        "token_type": token_type,
        "total_tokens": "19423",
        "total_transfers": 0,
        "trait_rarity_counts": [
            {
                "trait": "Background",
                "rarity_counts": [
                    { "value": "Yellow", "count": "4021" },
                    { "value": "Orange", "count": "3838" }
                ]
            },
            {
                "trait": "Mouth",
                "rarity_counts": [
                    { "value": "Grin", "count": "7" }
                ]
            }
        ]
    })
}

async fn mount_collection(mock_server: &MockServer, contract: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/collections/contract/{contract}")))
        .and(query_param("chain", "eth-main"))
        .and(header("X-API-KEY", API_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn successful_query_renders_table() {
    let mock_server = MockServer::start().await;
    mount_collection(&mock_server, CONTRACT, collection_body("erc721")).await;
    let controller = controller(&mock_server);

    let pending = controller.run_query(QueryInput::new(CONTRACT, Blockchain::EthMain));
    assert_eq!(render_text(&controller.state()), "Loading...\n");
    pending.await;

    let text = render_text(&controller.state());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Token Type: erc721 | Total Tokens: 19423 | Total Transfers: N/A"
    );
    assert!(lines[4].starts_with("Background | 2"));
    assert!(lines[4].contains("3929.5"));
    assert!(lines[4].ends_with("4021"));
    assert!(lines[5].starts_with("Mouth"));
    assert!(lines[5].contains("7.0"));
}

#[tokio::test]
async fn unknown_contract_fails_with_fixed_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/contract/0xnope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Collection not found"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let controller = controller(&mock_server);

    let outcome = controller
        .run_query(QueryInput::new("0xnope", Blockchain::EthMain))
        .await;

    assert_eq!(
        outcome,
        QueryOutcome::Settled(QueryState::Failure(QUERY_FAILED_MESSAGE.to_string()))
    );
    assert!(render_text(&controller.state()).starts_with("Error: verify chain"));
}

#[tokio::test]
async fn slow_earlier_response_is_discarded() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/collections/contract/0xslow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(collection_body("slow"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;
    mount_collection(&mock_server, "0xfast", collection_body("fast")).await;
    let controller = controller(&mock_server);

    let slow = tokio::spawn(controller.run_query(QueryInput::new("0xslow", Blockchain::EthMain)));
    let fast = controller.run_query(QueryInput::new("0xfast", Blockchain::EthMain));

    assert!(matches!(fast.await, QueryOutcome::Settled(QueryState::Success(_))));
    assert_eq!(slow.await.unwrap(), QueryOutcome::Superseded { sequence: 1 });

    let state = controller.state();
    assert_eq!(
        state.result().and_then(|r| r.token_type.as_deref()),
        Some("fast")
    );
}
