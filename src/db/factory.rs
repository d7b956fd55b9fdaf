//! Repository factory for dependency injection.
//!
//! Selects and initializes a repository backend from runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
#[cfg(feature = "mongo-repo")]
use super::repositories::{MongoConfig, MongoRepository};
use super::repository::{FullRepository, RepositoryError, RepositoryResult};

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// MongoDB document store
    Mongo,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the environment.
    ///
    /// Reads `REPOSITORY_TYPE`; defaults to Mongo when `MONGODB_URL` is set,
    /// otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }
        if std::env::var("MONGODB_URL").is_ok() {
            Self::Mongo
        } else {
            Self::Local
        }
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository of the given type, reading backend configuration
    /// from the environment where needed.
    pub async fn create(kind: RepositoryType) -> RepositoryResult<Arc<dyn FullRepository>> {
        match kind {
            RepositoryType::Local => Ok(Self::create_local()),
            #[cfg(feature = "mongo-repo")]
            RepositoryType::Mongo => {
                let config = MongoConfig::from_env()?;
                let repo = MongoRepository::connect(&config).await?;
                Ok(Arc::new(repo))
            }
            #[cfg(not(feature = "mongo-repo"))]
            RepositoryType::Mongo => Err(RepositoryError::configuration(
                "mongo backend requested but the mongo-repo feature is not enabled",
            )),
        }
    }

    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }
}
