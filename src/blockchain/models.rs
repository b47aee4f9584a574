// src/blockchain/models.rs
use ethers::{
    providers::{ProviderError, RpcError},
    types::{Address, TxHash, U256},
    utils::to_checksum,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::blockchain::services::units;

// --- Error types for gateway operations ---

/// Failure of a single gateway operation.
///
/// The tool layer turns these into the primitive shapes the MCP host expects
/// (`"Error: ..."` strings, `-1`, `null` or an `{error}` map).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("node unreachable: {0}")]
    NodeUnreachable(String),
    #[error("rpc failure: {0}")]
    RpcFailure(String),
    #[error("transaction rejected: {0}")]
    TransactionRejected(String),
    #[error("signing failed: {0}")]
    Signing(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// True when the caller supplied bad input and the node was never contacted.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GatewayError::InvalidAddress(_)
                | GatewayError::InvalidPrivateKey(_)
                | GatewayError::InvalidAmount(_)
        )
    }

    /// Classifies an error returned while broadcasting a signed payload.
    /// A JSON-RPC error object from the node means the payload was refused.
    pub(crate) fn from_submission(err: ProviderError) -> Self {
        match err.as_error_response() {
            Some(rpc) => GatewayError::TransactionRejected(rpc.message.clone()),
            None => GatewayError::from(err),
        }
    }
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        if let Some(rpc) = err.as_error_response() {
            GatewayError::RpcFailure(rpc.message.clone())
        } else if err.is_serde_error() {
            GatewayError::RpcFailure(err.to_string())
        } else {
            GatewayError::NodeUnreachable(err.to_string())
        }
    }
}

// --- Query Models ---

/// Native balance of an address as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub address: Address,
    pub wei: U256,
}

impl Balance {
    pub fn checksum_address(&self) -> String {
        to_checksum(&self.address, None)
    }

    pub fn ether(&self) -> String {
        units::format_ether(self.wei)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ETH", self.ether())
    }
}

/// Current legacy gas price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasPrice {
    pub wei: U256,
}

impl GasPrice {
    pub fn gwei(&self) -> String {
        units::format_gwei(self.wei)
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Gwei", self.gwei())
    }
}

/// Snapshot of the connected network.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NetworkSummary {
    pub network: String,
    pub chain_id: u64,
    pub block_number: u64,
    pub gas_price: String,
    pub is_connected: bool,
}

// --- Transfer Models ---

/// Outcome of a broadcast transfer. The transaction is not yet mined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub tx_hash: TxHash,
    pub from: Address,
    pub to: Address,
    pub nonce: U256,
    pub value: U256,
}

impl TransferReceipt {
    pub fn tx_hash_hex(&self) -> String {
        format!("{:?}", self.tx_hash)
    }
}

impl fmt::Display for TransferReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction sent! Hash: {}", self.tx_hash_hex())
    }
}
