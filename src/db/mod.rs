//! Document-store layer for campground data.
//!
//! Follows the repository pattern so storage backends can be swapped:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP layer (handlers, DTOs)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository traits (repository/)                        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴───────────────┐
//!     │ LocalRepository │ MongoRepository │
//!     │   (in-memory)   │  (mongo-repo)   │
//!     └─────────────────┴───────────────┘
//! ```

#[cfg(not(any(feature = "mongo-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repository::{FullRepository, RepositoryError, RepositoryResult};
