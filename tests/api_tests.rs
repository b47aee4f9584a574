//! Tests for the HTTP surface

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use common::*;
use node_gateway_mcp::api::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(url: &str) -> Router {
    create_router(state_for(url))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_network() {
    let (status, body) = send(app(UNREACHABLE_URL), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "network": "Sepolia Testnet" }));
}

#[tokio::test]
async fn balance_endpoint_returns_checksummed_address() {
    let mut server = mockito::Server::new_async().await;
    rpc_result(&mut server, "eth_getBalance", json!("0x14d1120d7b160000")).await;

    let (status, body) = send(
        app(&server.url()),
        get(&format!("/api/balance/{}", RECIPIENT_LOWER)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "address": RECIPIENT_CHECKSUMMED,
            "balance": "1.5 ETH",
            "wei": "1500000000000000000"
        })
    );
}

#[tokio::test]
async fn bad_address_is_a_client_error() {
    let (status, body) = send(app(UNREACHABLE_URL), get("/api/balance/0x1234")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid address"));
}

#[tokio::test]
async fn unreachable_node_is_a_bad_gateway() {
    let (status, body) = send(app(UNREACHABLE_URL), get("/api/network")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn tx_send_returns_hash() {
    let mut server = mockito::Server::new_async().await;
    rpc_result(&mut server, "eth_getTransactionCount", json!("0x2")).await;
    rpc_result(&mut server, "eth_gasPrice", json!("0x77359400")).await;
    rpc_result(&mut server, "eth_chainId", json!("0xaa36a7")).await;
    let hash = format!("0x{}", "9f".repeat(32));
    rpc_result(&mut server, "eth_sendRawTransaction", json!(hash)).await;

    let (status, body) = send(
        app(&server.url()),
        post_json(
            "/api/tx/send",
            json!({ "private_key": TEST_KEY, "to_address": RECIPIENT_LOWER, "amount_eth": 0.01 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tx_hash"], hash);
    assert_eq!(body["to"], RECIPIENT_CHECKSUMMED);
    assert_eq!(body["nonce"], "2");
}

#[tokio::test]
async fn rpc_route_forwards_to_mcp() {
    let mut server = mockito::Server::new_async().await;
    rpc_result(&mut server, "eth_chainId", json!("0xaa36a7")).await;

    let (status, body) = send(
        app(&server.url()),
        post_json(
            "/api/rpc",
            json!({
                "jsonrpc": "2.0",
                "id": 9,
                "method": "tools/call",
                "params": { "name": "get_chain_id", "arguments": {} }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 9);
    assert_eq!(body["result"]["data"], 11155111);
}
