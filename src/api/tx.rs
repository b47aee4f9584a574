use axum::{extract::State, http::StatusCode, Json};
use ethers::utils::to_checksum;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::{api::error_response, AppState};

#[derive(Deserialize)]
pub struct SendTxRequest {
    pub private_key: SecretString,
    pub to_address: String,
    pub amount_eth: f64,
}

#[derive(Debug, Serialize)]
pub struct SendTxResponse {
    pub tx_hash: String,
    pub from: String,
    pub to: String,
    pub nonce: String,
}

pub async fn send_transaction_handler(
    State(state): State<AppState>,
    Json(req): Json<SendTxRequest>,
) -> Result<Json<SendTxResponse>, (StatusCode, Json<Value>)> {
    let receipt = state
        .gateway
        .send_transfer(&req.private_key, &req.to_address, req.amount_eth)
        .await
        .map_err(|e| {
            error!("Transfer to {} failed: {}", req.to_address, e);
            error_response(e)
        })?;

    Ok(Json(SendTxResponse {
        tx_hash: receipt.tx_hash_hex(),
        from: to_checksum(&receipt.from, None),
        to: to_checksum(&receipt.to, None),
        nonce: receipt.nonce.to_string(),
    }))
}
