//! Provider status endpoint

use axum::{extract::State, routing::get, Json, Router};

use evm_client::detect_status;

use crate::dto::ProviderStatusResponse;
use crate::AppState;

/// Create provider routes
pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(get_status))
}

/// GET /provider/status - Probe the configured RPC endpoint
pub async fn get_status(State(state): State<AppState>) -> Json<ProviderStatusResponse> {
    let config = state.config();
    let status = detect_status(state.rpc(), config.chain).await;

    Json(ProviderStatusResponse {
        connected: status.is_online,
        url: config.rpc.url.clone(),
        chain: config.chain.as_str().to_string(),
        chain_id: status.chain_id,
        block_number: status.block_number,
        chain_matches: status.chain_matches,
    })
}
