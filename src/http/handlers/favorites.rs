//! Handlers for the per-user favorites list.
//!
//! Some of these endpoints answer with plain text instead of JSON when the
//! relevant state is absent; that dual response shape is part of the API
//! contract with the existing frontend and is kept as-is.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use super::authenticate;
use crate::http::dto::favorite_view;
use crate::http::error::AppError;
use crate::http::state::AppState;

const NO_FAVORITES: &str = "You have no favorites to display.";
const NOTHING_TO_DELETE: &str = "You do not have any favorites to delete.";
const ALREADY_FAVORITE: &str = "That campsite is already in the list of favorites!";
const NOT_A_FAVORITE: &str = "That campsite is not in your list of favorites!";

/// GET /favorites
///
/// The caller's favorite list with user and campsites resolved. No list, or
/// an empty one, is plain absence, not an error.
pub async fn get_own(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let identity = authenticate(&state, &headers).await?;
    let favorite = state.repository.fetch_favorite(&identity.user_id).await?;
    match favorite {
        Some(favorite) if !favorite.campsites.is_empty() => {
            let view = favorite_view(
                state.auth.as_ref(),
                state.repository.as_ref(),
                favorite,
            )
            .await?;
            Ok(Json(view).into_response())
        }
        _ => Ok(NO_FAVORITES.into_response()),
    }
}

/// POST /favorites
///
/// Batch add: a JSON array of campsite ids. Creates the list if absent;
/// ids already present are skipped silently.
pub async fn add_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(campsite_ids): Json<Vec<String>>,
) -> Result<Response, AppError> {
    let identity = authenticate(&state, &headers).await?;
    let favorite = state
        .repository
        .add_favorites(&identity.user_id, &campsite_ids)
        .await?;
    info!(user_id = %identity.user_id, count = campsite_ids.len(), "favorites added");
    Ok(Json(favorite).into_response())
}

/// PUT /favorites — not supported.
pub async fn replace_collection(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    authenticate(&state, &headers).await?;
    Err(AppError::unsupported("PUT", "/favorites"))
}

/// DELETE /favorites
///
/// Removes the caller's entire favorite list and returns it.
pub async fn delete_all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let identity = authenticate(&state, &headers).await?;
    match state.repository.delete_favorite(&identity.user_id).await? {
        Some(favorite) => Ok(Json(favorite).into_response()),
        None => Ok(NOTHING_TO_DELETE.into_response()),
    }
}

/// GET /favorites/{id} — not supported.
pub async fn get_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    authenticate(&state, &headers).await?;
    Err(AppError::unsupported(
        "GET",
        format!("/favorites/{campsite_id}"),
    ))
}

/// POST /favorites/{id}
///
/// Idempotent single add: an id already present is acknowledged without
/// mutation.
pub async fn add_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let identity = authenticate(&state, &headers).await?;
    if let Some(favorite) = state.repository.fetch_favorite(&identity.user_id).await? {
        if favorite.contains(&campsite_id) {
            return Ok(ALREADY_FAVORITE.into_response());
        }
    }
    let favorite = state
        .repository
        .add_favorites(&identity.user_id, std::slice::from_ref(&campsite_id))
        .await?;
    Ok(Json(favorite).into_response())
}

/// PUT /favorites/{id} — not supported.
pub async fn replace_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    authenticate(&state, &headers).await?;
    Err(AppError::unsupported(
        "PUT",
        format!("/favorites/{campsite_id}"),
    ))
}

/// DELETE /favorites/{id}
///
/// Removing an absent reference is a no-op with a descriptive notice, not an
/// error.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let identity = authenticate(&state, &headers).await?;
    let Some(favorite) = state.repository.fetch_favorite(&identity.user_id).await? else {
        return Ok(NOTHING_TO_DELETE.into_response());
    };
    if !favorite.contains(&campsite_id) {
        return Ok(NOT_A_FAVORITE.into_response());
    }
    let favorite = state
        .repository
        .remove_favorite(&identity.user_id, &campsite_id)
        .await?;
    Ok(Json(favorite).into_response())
}
