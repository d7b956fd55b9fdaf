//! Handlers for the embedded comment routes under a campsite.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::info;

use super::{authenticate, require_admin, HandlerResult};
use crate::db::models::{Campsite, Comment, CommentPatch, NewComment};
use crate::http::dto::{comment_view, CommentView, CreateCommentRequest};
use crate::http::error::AppError;
use crate::http::state::AppState;

fn campsite_not_found(campsite_id: &str) -> AppError {
    AppError::NotFound(format!("Campsite {campsite_id} not found"))
}

fn comment_not_found(comment_id: &str) -> AppError {
    AppError::NotFound(format!("Comment {comment_id} not found"))
}

/// Existence is always validated before any field of the comment is read:
/// resolve the parent, then the comment, then hand both to the caller.
async fn fetch_comment(
    state: &AppState,
    campsite_id: &str,
    comment_id: &str,
) -> Result<(Campsite, Comment), AppError> {
    let campsite = state
        .repository
        .fetch_campsite(campsite_id)
        .await?
        .ok_or_else(|| campsite_not_found(campsite_id))?;
    let comment = campsite
        .comment(comment_id)
        .cloned()
        .ok_or_else(|| comment_not_found(comment_id))?;
    Ok((campsite, comment))
}

/// GET /campsites/{id}/comments
///
/// The embedded sequence with authors resolved.
pub async fn list(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
) -> HandlerResult<Vec<CommentView>> {
    let campsite = state
        .repository
        .fetch_campsite(&campsite_id)
        .await?
        .ok_or_else(|| campsite_not_found(&campsite_id))?;
    let mut views = Vec::with_capacity(campsite.comments.len());
    for comment in campsite.comments {
        views.push(comment_view(state.auth.as_ref(), comment).await);
    }
    Ok(Json(views))
}

/// POST /campsites/{id}/comments
///
/// The author is the verified caller, always; any author field in the
/// payload is ignored.
pub async fn create(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentRequest>,
) -> HandlerResult<Campsite> {
    let identity = authenticate(&state, &headers).await?;
    let campsite = state
        .repository
        .add_comment(
            &campsite_id,
            NewComment {
                rating: payload.rating,
                text: payload.text,
                author: identity.user_id,
            },
        )
        .await?;
    Ok(Json(campsite))
}

/// PUT /campsites/{id}/comments — not supported.
pub async fn replace_collection(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    authenticate(&state, &headers).await?;
    Err(AppError::unsupported(
        "PUT",
        format!("/campsites/{campsite_id}/comments"),
    ))
}

/// DELETE /campsites/{id}/comments
///
/// Admin-only: removes every embedded comment, leaving the campsite itself.
pub async fn delete_all(
    State(state): State<AppState>,
    Path(campsite_id): Path<String>,
    headers: HeaderMap,
) -> HandlerResult<Campsite> {
    let identity = authenticate(&state, &headers).await?;
    require_admin(&identity)?;
    let campsite = state.repository.clear_comments(&campsite_id).await?;
    info!(campsite_id = %campsite.id, "cleared all comments");
    Ok(Json(campsite))
}

/// GET /campsites/{id}/comments/{cid}
///
/// Distinct 404 messages for a missing campsite vs. a missing comment.
pub async fn get_one(
    State(state): State<AppState>,
    Path((campsite_id, comment_id)): Path<(String, String)>,
) -> HandlerResult<Comment> {
    let (_, comment) = fetch_comment(&state, &campsite_id, &comment_id).await?;
    Ok(Json(comment))
}

/// POST /campsites/{id}/comments/{cid} — not supported.
pub async fn create_one(
    State(state): State<AppState>,
    Path((campsite_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<(), AppError> {
    authenticate(&state, &headers).await?;
    Err(AppError::unsupported(
        "POST",
        format!("/campsites/{campsite_id}/comments/{comment_id}"),
    ))
}

/// PUT /campsites/{id}/comments/{cid}
///
/// Owner-only partial update of `rating` and/or `text`.
pub async fn update_one(
    State(state): State<AppState>,
    Path((campsite_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(payload): Json<CommentPatch>,
) -> HandlerResult<Campsite> {
    let identity = authenticate(&state, &headers).await?;
    let (_, comment) = fetch_comment(&state, &campsite_id, &comment_id).await?;
    if comment.author != identity.user_id {
        return Err(AppError::not_owner());
    }
    let campsite = state
        .repository
        .update_comment(&campsite_id, &comment_id, payload)
        .await?;
    Ok(Json(campsite))
}

/// DELETE /campsites/{id}/comments/{cid}
///
/// Owner-only removal of one embedded comment.
pub async fn delete_one(
    State(state): State<AppState>,
    Path((campsite_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> HandlerResult<Campsite> {
    let identity = authenticate(&state, &headers).await?;
    let (_, comment) = fetch_comment(&state, &campsite_id, &comment_id).await?;
    if comment.author != identity.user_id {
        return Err(AppError::not_owner());
    }
    let campsite = state
        .repository
        .remove_comment(&campsite_id, &comment_id)
        .await?;
    Ok(Json(campsite))
}
