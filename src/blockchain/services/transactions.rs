// src/blockchain/services/transactions.rs

use crate::blockchain::models::{GatewayError, GatewayResult};
use ethers::{
    signers::LocalWallet,
    types::{
        transaction::eip2718::TypedTransaction, Address, Bytes, TransactionRequest, U256,
    },
};
use secrecy::{ExposeSecret, SecretString};
use std::str::FromStr;

/// Gas limit of a plain value transfer. Transfers into contracts need more and
/// will be refused by the node.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Loads the signing wallet. The key is only exposed for the parse.
pub fn load_wallet(private_key: &SecretString) -> GatewayResult<LocalWallet> {
    LocalWallet::from_str(private_key.expose_secret().trim())
        .map_err(|e| GatewayError::InvalidPrivateKey(e.to_string()))
}

/// Assembles a legacy value transfer.
pub fn build_transfer(
    from: Address,
    to: Address,
    value: U256,
    nonce: U256,
    gas_price: U256,
    chain_id: u64,
) -> TransactionRequest {
    TransactionRequest::new()
        .from(from)
        .to(to)
        .value(value)
        .nonce(nonce)
        .gas(TRANSFER_GAS_LIMIT)
        .gas_price(gas_price)
        .chain_id(chain_id)
}

/// Signs the request and returns the RLP payload for `eth_sendRawTransaction`.
pub fn sign_transfer(wallet: &LocalWallet, tx: &TransactionRequest) -> GatewayResult<Bytes> {
    let typed: TypedTransaction = tx.clone().into();
    let signature = wallet
        .sign_transaction_sync(&typed)
        .map_err(|e| GatewayError::Signing(e.to_string()))?;
    Ok(typed.rlp_signed(&signature))
}
