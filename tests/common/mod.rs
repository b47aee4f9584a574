//! Shared fixtures: a mockito-backed JSON-RPC node and gateway constructors.
#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use node_gateway_mcp::{blockchain::NodeGateway, config::Config, AppState};
use serde_json::{json, Value};

/// Well-known development key (ganache account 0). Never funded on Sepolia.
pub const TEST_KEY: &str = "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";
pub const TEST_SENDER: &str = "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1";

pub const RECIPIENT_CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const RECIPIENT_LOWER: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

/// Nothing listens on port 1, so every request fails at connect.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub fn config_for(url: &str) -> Config {
    Config {
        rpc_url: url.to_string(),
        ..Config::default()
    }
}

pub fn gateway_for(url: &str) -> NodeGateway {
    NodeGateway::new(&config_for(url)).expect("valid test url")
}

pub fn state_for(url: &str) -> AppState {
    AppState::new(config_for(url)).expect("valid test url")
}

/// Unregistered mock answering requests whose body contains `partial`.
/// Chain `.expect(n)` before `.create_async()` when hit counts matter.
pub fn rpc_result_mock(server: &mut ServerGuard, partial: Value, result: Value) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(partial))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "jsonrpc": "2.0", "id": 1, "result": result }).to_string())
}

/// Unregistered mock answering with a JSON-RPC error object.
pub fn rpc_error_mock(server: &mut ServerGuard, partial: Value, message: &str) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(partial))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32000, "message": message }
            })
            .to_string(),
        )
}

/// Answers `method` with `result`.
pub async fn rpc_result(server: &mut ServerGuard, method: &str, result: Value) -> Mock {
    rpc_result_mock(server, json!({ "method": method }), result)
        .create_async()
        .await
}

/// Answers `method` with a JSON-RPC error.
pub async fn rpc_error(server: &mut ServerGuard, method: &str, message: &str) -> Mock {
    rpc_error_mock(server, json!({ "method": method }), message)
        .create_async()
        .await
}

/// Fails the test on any request reaching the node.
pub async fn no_node_calls(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await
}
