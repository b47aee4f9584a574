use crate::{api::error_response, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::error;

// Defines the structure for the JSON output returned by our API.
#[derive(Debug, Serialize)]
pub struct BalanceOutput {
    /// Checksummed form of the requested address
    pub address: String,
    /// Human-readable balance, e.g. "1.5 ETH"
    pub balance: String,
    pub wei: String,
}

// The handler function for the GET /balance/{address} endpoint.
pub async fn get_balance_handler(
    Path(address): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.gateway.get_balance(&address).await {
        Ok(balance) => {
            let output = BalanceOutput {
                address: balance.checksum_address(),
                balance: balance.to_string(),
                wei: balance.wei.to_string(),
            };
            (StatusCode::OK, Json(output)).into_response()
        }
        Err(e) => {
            error!("Failed to get balance for {}: {}", address, e);
            error_response(e).into_response()
        }
    }
}
