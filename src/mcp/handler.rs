//! # MCP Handler Module
//!
//! This module implements the Model Context Protocol (MCP) dispatcher.
//! It handles incoming JSON-RPC requests and routes them to the gateway tools
//! and static resources.
//!
//! ## Supported Methods
//!
//! - `initialize`, `ping`
//! - `tools/list`, `tools/call`
//! - `resources/list`, `resources/templates/list`, `resources/read`
//!
//! Tool names may also be called directly as methods (`get_balance`, ...);
//! they are rewritten into `tools/call`.

use crate::{
    mcp::{
        protocol::{error_codes, Request, Response},
        resources, tools,
    },
    AppState,
};
use serde_json::{json, Value};
use tracing::{debug, info};

const DEFAULT_PROTOCOL_VERSION: &str = "2025-06-18";

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        debug!("Ignoring notification: {}", req.method);
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "ping" => Response::success(req.response_id(), json!({})),
        "tools/list" => Response::success(
            req.response_id(),
            json!({ "tools": tools::tool_definitions() }),
        ),
        "tools/call" => handle_tool_call(req, state).await,
        "resources/list" => Response::success(req.response_id(), json!({ "resources": [] })),
        "resources/templates/list" => Response::success(
            req.response_id(),
            json!({ "resourceTemplates": resources::resource_templates() }),
        ),
        "resources/read" => handle_resource_read(&req),
        // Convenience aliases to support direct method calls from CLI.
        // They are rewritten into tools/call internally to reuse the same logic
        method if tools::TOOL_NAMES.contains(&method) => {
            let wrapped = Request {
                jsonrpc: req.jsonrpc.clone(),
                id: req.id.clone(),
                method: "tools/call".to_string(),
                params: Some(json!({
                    "name": method,
                    "arguments": req.params.clone().unwrap_or_else(|| json!({}))
                })),
            };
            handle_tool_call(wrapped, state).await
        }
        _ => Response::error(
            req.response_id(),
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by dispatching it to the matching tool.
async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.response_id(),
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.response_id(),
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let empty_args = json!({});
    let args = params.get("arguments").unwrap_or(&empty_args);

    match tools::call_tool(&state.gateway, tool_name, args, &req.response_id()).await {
        Ok(output) => Response::success(req.response_id(), output.into_result()),
        Err(err_resp) => err_resp,
    }
}

fn handle_resource_read(req: &Request) -> Response {
    let uri = match req.param("uri").and_then(Value::as_str) {
        Some(uri) => uri,
        None => {
            return Response::error(
                req.response_id(),
                error_codes::INVALID_PARAMS,
                "Missing 'uri' field in params".into(),
            )
        }
    };

    match resources::read_resource(uri) {
        Some(text) => Response::success(
            req.response_id(),
            json!({
                "contents": [{ "uri": uri, "mimeType": "text/plain", "text": text }]
            }),
        ),
        None => Response::error(
            req.response_id(),
            error_codes::RESOURCE_NOT_FOUND,
            format!("Resource not found: {}", uri),
        ),
    }
}

fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    });
    let capabilities = json!({
        "tools": { "listChanged": false },
        "resources": { "subscribe": false, "listChanged": false }
    });
    // Echo the client's version so older hosts keep working
    let protocol_version = req
        .param("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);
    let instructions =
        "Ethereum node gateway: balance, block number, gas price, chain id and plain ETH transfers against one configured endpoint.";

    Response::success(
        req.response_id(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": protocol_version,
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}
