use crate::{api::error_response, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

/// GET /network: same shape as the `get_testnet_info` tool, with a 502 on failure.
pub async fn get_network_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.gateway.get_network_summary().await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            error!("Failed to get network summary: {}", e);
            error_response(e).into_response()
        }
    }
}
