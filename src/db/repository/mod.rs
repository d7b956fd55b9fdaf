//! Repository trait definitions.
//!
//! The HTTP layer only ever sees `Arc<dyn FullRepository>`; concrete
//! backends live in [`crate::db::repositories`].

pub mod campsites;
pub mod error;
pub mod favorites;

pub use campsites::CampsiteRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use favorites::FavoriteRepository;

use async_trait::async_trait;

/// Combined repository interface: everything a handler needs.
#[async_trait]
pub trait FullRepository: CampsiteRepository + FavoriteRepository {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
