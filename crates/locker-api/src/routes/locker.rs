//! Locker page endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use locker_core::ProtocolError;
use tokenlock::{ActionOutcome, LockAction, ViewState};

use crate::dto::{AccountRequest, AddressRequest, ApiError};
use crate::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

/// Create locker routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/view", get(get_view))
        .route("/address", post(set_address))
        .route("/account", post(set_account))
        .route("/refresh", post(refresh))
        .route("/actions/:action", post(trigger_action))
        .route("/force-unlock", post(force_unlock))
        .route("/dialog/confirm", post(confirm_dialog))
        .route("/dialog/cancel", post(cancel_dialog))
        .route("/reset", post(reset))
}

fn protocol_error(e: ProtocolError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ApiError::new(e.error_code(), e.to_string())),
    )
}

/// GET /locker/view - Current view state
pub async fn get_view(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.session().view().await)
}

/// POST /locker/address - Address input changed
pub async fn set_address(
    State(state): State<AppState>,
    Json(request): Json<AddressRequest>,
) -> Json<ViewState> {
    Json(state.session().set_address(request.address).await)
}

/// POST /locker/account - Wallet account changed
pub async fn set_account(
    State(state): State<AppState>,
    Json(request): Json<AccountRequest>,
) -> ApiResult<ViewState> {
    let wallet = state
        .wallet_for(request.account.as_deref(), request.can_sign)
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("invalid_address", e.to_string())),
            )
        })?;

    Ok(Json(state.session().connect_wallet(Arc::new(wallet)).await))
}

/// POST /locker/refresh - Re-read the current token
pub async fn refresh(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.session().refresh_token().await)
}

/// POST /locker/actions/{approve|lock|unlock} - Trigger an action
pub async fn trigger_action(
    State(state): State<AppState>,
    Path(action): Path<LockAction>,
) -> ApiResult<ActionOutcome> {
    if action == LockAction::ForceUnlock {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request(
                "Force unlock goes through /locker/force-unlock",
            )),
        ));
    }
    state
        .session()
        .trigger(action)
        .await
        .map(Json)
        .map_err(protocol_error)
}

/// POST /locker/force-unlock - Open the force-unlock confirmation
pub async fn force_unlock(State(state): State<AppState>) -> ApiResult<ActionOutcome> {
    state
        .session()
        .trigger(LockAction::ForceUnlock)
        .await
        .map(Json)
        .map_err(protocol_error)
}

/// POST /locker/dialog/confirm - Accept the force-unlock confirmation
pub async fn confirm_dialog(State(state): State<AppState>) -> Json<ActionOutcome> {
    Json(state.session().confirm_force_unlock().await)
}

/// POST /locker/dialog/cancel - Dismiss the force-unlock confirmation
pub async fn cancel_dialog(State(state): State<AppState>) -> Json<ActionOutcome> {
    Json(state.session().cancel_force_unlock().await)
}

/// POST /locker/reset - Discard the page state (page unmounted)
pub async fn reset(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.session().reset().await)
}
