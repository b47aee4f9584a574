//! # API Module
//!
//! HTTP handlers for the gateway when it runs in server mode.
//!
//! ## Available Endpoints
//!
//! - `GET /health` - Liveness and configured network
//! - `POST /rpc` - JSON-RPC endpoint for MCP tool calls
//! - `GET /balance/:address` - Native balance of an address
//! - `GET /network` - Chain id, head block, gas price and connectivity
//! - `POST /tx/send` - Sign and broadcast a plain ETH transfer

pub mod balance;
pub mod network;
pub mod tx;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    blockchain::GatewayError,
    mcp::{
        handler::handle_mcp_request,
        protocol::{error_codes, Request, Response},
    },
    AppState,
};

/// Builds the full application router, mounted under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(health_handler))
        .route("/balance/:address", get(balance::get_balance_handler))
        .route("/network", get(network::get_network_handler))
        .route("/tx/send", post(tx::send_transaction_handler))
        // JSON-RPC endpoint for MCP tool calls
        .route("/rpc", post(rpc_handler));

    Router::new()
        .nest("/api", api_router)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "network": state.gateway.network() }))
}

// Forward JSON-RPC requests over HTTP to the MCP handler
async fn rpc_handler(State(state): State<AppState>, Json(req): Json<Request>) -> Json<Response> {
    match handle_mcp_request(req, state).await {
        Some(resp) => Json(resp),
        None => Json(Response::error(
            serde_json::Value::Null,
            error_codes::INVALID_REQUEST,
            "Notifications are not supported over HTTP".into(),
        )),
    }
}

/// Bad input is the caller's fault; anything else came from the node.
pub(crate) fn error_status(err: &GatewayError) -> StatusCode {
    if err.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    }
}

pub(crate) fn error_response(err: GatewayError) -> (StatusCode, Json<serde_json::Value>) {
    (error_status(&err), Json(json!({ "error": err.to_string() })))
}
