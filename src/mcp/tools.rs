//! # Gateway tools
//!
//! Each tool calls one [`NodeGateway`] operation and flattens its
//! [`GatewayResult`](crate::blockchain::GatewayResult) into the primitive shape
//! MCP hosts of this server expect:
//!
//! | Tool | Success | Failure |
//! |---|---|---|
//! | `get_balance` | `"<amount> ETH"` | `"Error: <msg>"` |
//! | `get_block_number` | block height | `-1` |
//! | `get_gas_price` | `"<amount> Gwei"` | `"Error: <msg>"` |
//! | `get_chain_id` | chain id | `null` |
//! | `get_testnet_info` | `{network, chain_id, block_number, gas_price, is_connected}` | `{error}` |
//! | `send_transaction` | `"Transaction sent! Hash: 0x…"` | `"Error: <msg>"` |
//!
//! The primitive value is carried in `data`, mirrored as text `content`, and
//! `isError` tells structured clients which case they got.

use crate::{
    blockchain::{GatewayError, NodeGateway},
    mcp::protocol::{error_codes, Response},
    utils,
};
use secrecy::SecretString;
use serde_json::{json, Value};
use tracing::warn;

pub const TOOL_NAMES: [&str; 6] = [
    "get_balance",
    "get_block_number",
    "get_gas_price",
    "get_chain_id",
    "get_testnet_info",
    "send_transaction",
];

/// Result of one tool invocation, before it is wrapped for MCP.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub data: Value,
    pub is_error: bool,
}

impl ToolOutput {
    fn success(data: Value) -> Self {
        Self { data, is_error: false }
    }

    fn failure(data: Value) -> Self {
        Self { data, is_error: true }
    }

    fn error_text(tool: &str, err: &GatewayError) -> Self {
        warn!("{} failed: {}", tool, err);
        Self::failure(Value::String(format!("Error: {}", err)))
    }

    /// Text form of `data`: strings as-is, everything else as JSON.
    pub fn text(&self) -> String {
        match &self.data {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// The `tools/call` result object.
    pub fn into_result(self) -> Value {
        json!({
            "content": [{ "type": "text", "text": self.text() }],
            "data": self.data,
            "isError": self.is_error,
        })
    }
}

pub async fn get_balance(gateway: &NodeGateway, address: &str) -> ToolOutput {
    match gateway.get_balance(address).await {
        Ok(balance) => ToolOutput::success(Value::String(balance.to_string())),
        Err(e) => ToolOutput::error_text("get_balance", &e),
    }
}

pub async fn get_block_number(gateway: &NodeGateway) -> ToolOutput {
    match gateway.get_block_number().await {
        Ok(number) => ToolOutput::success(json!(number)),
        Err(e) => {
            warn!("get_block_number failed: {}", e);
            ToolOutput::failure(json!(-1))
        }
    }
}

pub async fn get_gas_price(gateway: &NodeGateway) -> ToolOutput {
    match gateway.get_gas_price().await {
        Ok(price) => ToolOutput::success(Value::String(price.to_string())),
        Err(e) => ToolOutput::error_text("get_gas_price", &e),
    }
}

pub async fn get_chain_id(gateway: &NodeGateway) -> ToolOutput {
    match gateway.get_chain_id().await {
        Ok(chain_id) => ToolOutput::success(json!(chain_id)),
        Err(e) => {
            warn!("get_chain_id failed: {}", e);
            ToolOutput::failure(Value::Null)
        }
    }
}

pub async fn get_testnet_info(gateway: &NodeGateway) -> ToolOutput {
    match gateway.get_network_summary().await {
        Ok(summary) => match serde_json::to_value(&summary) {
            Ok(value) => ToolOutput::success(value),
            Err(e) => ToolOutput::failure(json!({ "error": e.to_string() })),
        },
        Err(e) => {
            warn!("get_testnet_info failed: {}", e);
            ToolOutput::failure(json!({ "error": e.to_string() }))
        }
    }
}

pub async fn send_transaction(
    gateway: &NodeGateway,
    private_key: &SecretString,
    to_address: &str,
    amount_eth: f64,
) -> ToolOutput {
    match gateway.send_transfer(private_key, to_address, amount_eth).await {
        Ok(receipt) => ToolOutput::success(Value::String(receipt.to_string())),
        Err(e) => ToolOutput::error_text("send_transaction", &e),
    }
}

/// Dispatches a `tools/call` by name. `Err` is reserved for protocol errors
/// (unknown tool, missing arguments); gateway failures are `Ok` outputs.
pub async fn call_tool(
    gateway: &NodeGateway,
    name: &str,
    args: &Value,
    req_id: &Value,
) -> Result<ToolOutput, Response> {
    let output = match name {
        "get_balance" => {
            let address = utils::get_required_arg::<String>(args, "address", req_id)?;
            get_balance(gateway, &address).await
        }
        "get_block_number" => get_block_number(gateway).await,
        "get_gas_price" => get_gas_price(gateway).await,
        "get_chain_id" => get_chain_id(gateway).await,
        "get_testnet_info" => get_testnet_info(gateway).await,
        "send_transaction" => {
            let private_key =
                SecretString::new(utils::get_required_arg::<String>(args, "private_key", req_id)?);
            let to_address = utils::get_required_arg::<String>(args, "to_address", req_id)?;
            let amount_eth = utils::get_number_arg(args, "amount_eth", req_id)?;
            send_transaction(gateway, &private_key, &to_address, amount_eth).await
        }
        _ => {
            return Err(Response::error(
                req_id.clone(),
                error_codes::INVALID_PARAMS,
                format!("Unknown tool: {}", name),
            ))
        }
    };

    Ok(output)
}

/// JSON definitions returned by `tools/list`.
pub fn tool_definitions() -> Value {
    let no_args = json!({ "type": "object", "properties": {}, "additionalProperties": false });

    json!([
        {
            "name": "get_balance",
            "description": "Get the balance of an Ethereum address in ETH.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "address": {"type": "string", "description": "The 0x... address to check, any casing."}
                },
                "required": ["address"],
                "additionalProperties": false
            }
        },
        {
            "name": "get_block_number",
            "description": "Get the latest block number. Returns -1 if the node cannot be reached.",
            "inputSchema": no_args
        },
        {
            "name": "get_gas_price",
            "description": "Get the current gas price in Gwei.",
            "inputSchema": no_args
        },
        {
            "name": "get_chain_id",
            "description": "Get the current chain ID. Returns null if the node cannot be reached.",
            "inputSchema": no_args
        },
        {
            "name": "get_testnet_info",
            "description": "Get information about the current testnet: chain ID, block number, gas price and connectivity.",
            "inputSchema": no_args
        },
        {
            "name": "send_transaction",
            "description": "Send Ether from the private key to the recipient address. Plain transfers only (gas limit 21000). Returns the transaction hash or an error message.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "private_key": {"type": "string", "description": "Hex private key of the sender. Never logged."},
                    "to_address": {"type": "string", "description": "Recipient 0x... address."},
                    "amount_eth": {"type": "number", "description": "Amount to send, in ETH."}
                },
                "required": ["private_key", "to_address", "amount_eth"],
                "additionalProperties": false
            }
        }
    ])
}
