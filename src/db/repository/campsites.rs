//! Campsite repository trait covering the campsite collection and its
//! embedded comment sequences.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::{Campsite, CampsiteUpdate, CommentPatch, NewCampsite, NewComment};

/// Repository trait for campsite operations.
///
/// Embedded comments follow the aggregate write-back contract: the backend
/// loads the parent document, mutates the embedded sequence, and persists the
/// whole parent through its update path. Comment ids are store-assigned and
/// unique only within their parent.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CampsiteRepository: Send + Sync {
    /// Fetch every campsite, embedded comments included.
    async fn list_campsites(&self) -> RepositoryResult<Vec<Campsite>>;

    /// Insert a new campsite.
    ///
    /// Fails with `Conflict` if `name` collides with an existing campsite and
    /// with `Validation` if a field constraint (`cost >= 0`) is violated.
    async fn create_campsite(&self, new: NewCampsite) -> RepositoryResult<Campsite>;

    /// Remove every campsite unconditionally, returning the removed count.
    async fn delete_all_campsites(&self) -> RepositoryResult<u64>;

    /// Fetch one campsite by id, `None` if absent.
    async fn fetch_campsite(&self, id: &str) -> RepositoryResult<Option<Campsite>>;

    /// Apply a partial update (`$set` semantics) to one campsite and return
    /// the updated document. Fails with `NotFound` if the id is absent.
    async fn update_campsite(
        &self,
        id: &str,
        update: CampsiteUpdate,
    ) -> RepositoryResult<Campsite>;

    /// Delete one campsite (and transitively its embedded comments),
    /// returning the deleted document. Fails with `NotFound` if absent.
    async fn delete_campsite(&self, id: &str) -> RepositoryResult<Campsite>;

    /// Append a comment to a campsite's embedded sequence and persist the
    /// parent. The store assigns the comment id and timestamps. Fails with
    /// `NotFound` if the parent is absent and `Validation` if `rating` is
    /// outside 1..=5.
    async fn add_comment(
        &self,
        campsite_id: &str,
        new: NewComment,
    ) -> RepositoryResult<Campsite>;

    /// Apply a partial update to one embedded comment and persist the parent.
    /// Fails with `NotFound` naming whichever of campsite or comment is
    /// absent.
    async fn update_comment(
        &self,
        campsite_id: &str,
        comment_id: &str,
        patch: CommentPatch,
    ) -> RepositoryResult<Campsite>;

    /// Remove one embedded comment and persist the parent.
    async fn remove_comment(
        &self,
        campsite_id: &str,
        comment_id: &str,
    ) -> RepositoryResult<Campsite>;

    /// Remove every embedded comment from one campsite and persist the
    /// parent. The parent campsite itself is left in place.
    async fn clear_comments(&self, campsite_id: &str) -> RepositoryResult<Campsite>;
}
