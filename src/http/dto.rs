//! Request and response types for the REST API.
//!
//! Views are the populated response shapes: comment authors and favorite
//! campsite references are resolved to the referenced entities before
//! serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthGate, UserPublic};
use crate::db::models::{Campsite, Comment, Favorite};
use crate::db::repository::{FullRepository, RepositoryResult};

/// Payload for adding a comment. The author field of any payload is ignored;
/// the server assigns the verified caller as author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub rating: i32,
    pub text: String,
}

/// Collection delete summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSummary {
    pub deleted_count: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// A campsite with comment authors resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampsiteView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub elevation: f64,
    pub cost: f64,
    pub featured: bool,
    pub comments: Vec<CommentView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An embedded comment with its author resolved to public user fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: String,
    pub rating: i32,
    pub text: String,
    pub author: UserPublic,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A favorite list with user and campsite references resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteView {
    pub id: String,
    pub user: UserPublic,
    pub campsites: Vec<Campsite>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resolve a comment author. Unknown authors keep the raw id in both fields
/// so a stale reference never hides the comment itself.
pub async fn resolve_author(auth: &dyn AuthGate, user_id: &str) -> UserPublic {
    match auth.lookup_user(user_id).await {
        Some(user) => user,
        None => UserPublic {
            id: user_id.to_string(),
            username: user_id.to_string(),
        },
    }
}

pub async fn comment_view(auth: &dyn AuthGate, comment: Comment) -> CommentView {
    let author = resolve_author(auth, &comment.author).await;
    CommentView {
        id: comment.id,
        rating: comment.rating,
        text: comment.text,
        author,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
    }
}

pub async fn campsite_view(auth: &dyn AuthGate, campsite: Campsite) -> CampsiteView {
    let mut comments = Vec::with_capacity(campsite.comments.len());
    for comment in campsite.comments {
        comments.push(comment_view(auth, comment).await);
    }
    CampsiteView {
        id: campsite.id,
        name: campsite.name,
        description: campsite.description,
        image: campsite.image,
        elevation: campsite.elevation,
        cost: campsite.cost,
        featured: campsite.featured,
        comments,
        created_at: campsite.created_at,
        updated_at: campsite.updated_at,
    }
}

/// Populate a favorite: the owning user and every campsite reference are
/// resolved. References to campsites that no longer exist are dropped from
/// the view (the stored reference set is left untouched).
pub async fn favorite_view(
    auth: &dyn AuthGate,
    repository: &dyn FullRepository,
    favorite: Favorite,
) -> RepositoryResult<FavoriteView> {
    let user = resolve_author(auth, &favorite.user).await;
    let mut campsites = Vec::with_capacity(favorite.campsites.len());
    for campsite_id in &favorite.campsites {
        if let Some(campsite) = repository.fetch_campsite(campsite_id).await? {
            campsites.push(campsite);
        }
    }
    Ok(FavoriteView {
        id: favorite.id,
        user,
        campsites,
        created_at: favorite.created_at,
        updated_at: favorite.updated_at,
    })
}
