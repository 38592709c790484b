//! Axum route handlers for the access gate.
//!
//! A password mismatch is NOT an HTTP error: the gate reports it as a
//! transient `error` flag in the status body, mirroring the shake-and-
//! clear indicator in the editor UI.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::gate::GateStatus;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// `?edit=true` reveals the admin entry affordance. Not a security
    /// boundary — it only hides the button by default.
    #[serde(default)]
    pub edit: bool,
}

#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    #[serde(flatten)]
    pub gate: GateStatus,
    pub admin_visible: bool,
}

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub password: String,
}

/// GET /api/v1/auth/status
pub async fn handle_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        gate: state.gate.status(),
        admin_visible: query.edit,
    })
}

/// POST /api/v1/auth/edit
pub async fn handle_request_edit(State(state): State<AppState>) -> Json<GateStatus> {
    Json(state.gate.request_edit())
}

/// POST /api/v1/auth/unlock
pub async fn handle_unlock(
    State(state): State<AppState>,
    Json(req): Json<UnlockRequest>,
) -> Result<Json<GateStatus>, AppError> {
    let doc = state.store.document().await;
    let status = state
        .gate
        .unlock(&req.password, doc.admin_password.as_deref())?;
    Ok(Json(status))
}

/// POST /api/v1/auth/cancel
pub async fn handle_cancel(State(state): State<AppState>) -> Json<GateStatus> {
    Json(state.gate.cancel())
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<Json<GateStatus>, AppError> {
    Ok(Json(state.gate.logout()?))
}
