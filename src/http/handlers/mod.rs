//! HTTP handlers for the REST API.
//!
//! Handlers verify credentials where the route demands it, then delegate to
//! the repository. Auth ordering follows the upstream contract: the CORS
//! layer has already run by the time any handler (and thus the auth gate)
//! is reached.

pub mod campsites;
pub mod comments;
pub mod favorites;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;
use crate::auth::{bearer_credential, Identity};

/// Result type for JSON handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Verify the request credential and resolve the caller's identity.
pub(crate) async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Identity, AppError> {
    let credential = bearer_credential(headers)?;
    Ok(state.auth.verify_user(credential).await?)
}

/// Assert the verified caller holds administrative privilege.
pub(crate) fn require_admin(identity: &Identity) -> Result<(), AppError> {
    if identity.admin {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You are not authorized to perform this operation!".to_string(),
        ))
    }
}

/// GET /health
///
/// Reports service and store status.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database,
    }))
}
