//! Argument helpers for MCP tool calls

use crate::mcp::protocol::{error_codes, Response};
use serde::de::DeserializeOwned;
use serde_json::{from_value, Value};

/// Extract a required argument from a JSON object, or build the
/// `INVALID_PARAMS` response to send back.
pub fn get_required_arg<T: DeserializeOwned>(
    args: &Value,
    key: &str,
    req_id: &Value,
) -> Result<T, Response> {
    from_value(args.get(key).cloned().unwrap_or(Value::Null)).map_err(|_| missing_arg(key, req_id))
}

/// Like [`get_required_arg`] for a float, also accepting numeric strings
/// such as `"0.01"` which some hosts send.
pub fn get_number_arg(args: &Value, key: &str, req_id: &Value) -> Result<f64, Response> {
    match args.get(key) {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| missing_arg(key, req_id)),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| missing_arg(key, req_id)),
        _ => Err(missing_arg(key, req_id)),
    }
}

fn missing_arg(key: &str, req_id: &Value) -> Response {
    Response::error(
        req_id.clone(),
        error_codes::INVALID_PARAMS,
        format!("Missing or invalid required argument: '{}'", key),
    )
}
