//! Favorite repository trait: the per-user favorites list.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::Favorite;

/// Repository trait for favorite-list operations.
///
/// At most one favorite document exists per user; the store enforces the
/// no-duplicate invariant on the campsite reference set.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Fetch the favorite document for one user, `None` if the user has
    /// never favorited anything.
    async fn fetch_favorite(&self, user_id: &str) -> RepositoryResult<Option<Favorite>>;

    /// Add campsite references for a user, creating the favorite document if
    /// absent. References already present are skipped silently; this is the
    /// `$addToSet` contract.
    async fn add_favorites(
        &self,
        user_id: &str,
        campsite_ids: &[String],
    ) -> RepositoryResult<Favorite>;

    /// Remove one campsite reference from a user's favorites and persist.
    /// Fails with `NotFound` if the user has no favorite document; removing
    /// a reference that is not present leaves the document unchanged.
    async fn remove_favorite(
        &self,
        user_id: &str,
        campsite_id: &str,
    ) -> RepositoryResult<Favorite>;

    /// Delete the user's entire favorite document, returning it, or `None`
    /// if the user had none.
    async fn delete_favorite(&self, user_id: &str) -> RepositoryResult<Option<Favorite>>;
}
