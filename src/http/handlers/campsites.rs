//! Handlers for the campsite collection and item routes.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::info;

use super::{authenticate, require_admin, HandlerResult};
use crate::db::models::{Campsite, CampsiteUpdate, NewCampsite};
use crate::http::dto::{campsite_view, CampsiteView, DeleteSummary};
use crate::http::error::AppError;
use crate::http::state::AppState;

/// GET /campsites
///
/// Full list with comment authors resolved. No auth, no pagination.
pub async fn list(State(state): State<AppState>) -> HandlerResult<Vec<CampsiteView>> {
    let campsites = state.repository.list_campsites().await?;
    let mut views = Vec::with_capacity(campsites.len());
    for campsite in campsites {
        views.push(campsite_view(state.auth.as_ref(), campsite).await);
    }
    Ok(Json(views))
}

/// POST /campsites
///
/// Admin-only create. Duplicate names are a conflict.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewCampsite>,
) -> HandlerResult<Campsite> {
    let identity = authenticate(&state, &headers).await?;
    require_admin(&identity)?;
    let campsite = state.repository.create_campsite(payload).await?;
    info!(campsite_id = %campsite.id, name = %campsite.name, "campsite created");
    Ok(Json(campsite))
}

/// PUT /campsites — not supported.
pub async fn replace_collection(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    authenticate(&state, &headers).await?;
    Err(AppError::unsupported("PUT", "/campsites"))
}

/// DELETE /campsites
///
/// Admin-only, unconditional delete of every campsite. Destructive: there is
/// no confirmation or soft-delete.
pub async fn delete_all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> HandlerResult<DeleteSummary> {
    let identity = authenticate(&state, &headers).await?;
    require_admin(&identity)?;
    let deleted_count = state.repository.delete_all_campsites().await?;
    info!(deleted_count, "deleted all campsites");
    Ok(Json(DeleteSummary { deleted_count }))
}

/// GET /campsites/{id}
///
/// One canonical not-found shape: an absent id is a structured 404, never a
/// null body.
pub async fn get_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
) -> HandlerResult<Campsite> {
    let campsite = state
        .repository
        .fetch_campsite(&campsite_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campsite {campsite_id} not found")))?;
    Ok(Json(campsite))
}

/// POST /campsites/{id} — not supported.
pub async fn create_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    authenticate(&state, &headers).await?;
    Err(AppError::unsupported(
        "POST",
        format!("/campsites/{campsite_id}"),
    ))
}

/// PUT /campsites/{id}
///
/// Partial update: only fields present in the payload are applied.
pub async fn update_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<CampsiteUpdate>,
) -> HandlerResult<Campsite> {
    authenticate(&state, &headers).await?;
    let campsite = state
        .repository
        .update_campsite(&campsite_id, payload)
        .await?;
    Ok(Json(campsite))
}

/// DELETE /campsites/{id}
///
/// Removes the campsite and, with it, its embedded comments.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> HandlerResult<Campsite> {
    authenticate(&state, &headers).await?;
    let campsite = state.repository.delete_campsite(&campsite_id).await?;
    info!(campsite_id = %campsite.id, "campsite deleted");
    Ok(Json(campsite))
}
