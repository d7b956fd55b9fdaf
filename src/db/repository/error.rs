//! Error types for repository operations.

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
///
/// Variants map onto the store's failure surface: missing entities, field
/// constraint violations, uniqueness conflicts, and backend failures.
/// Backend failures carry the driver's message unmodified; no retry or
/// recovery is attempted at this layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A uniqueness constraint was violated (e.g. duplicate campsite name).
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// A field-level store constraint was violated.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Connection-level backend failure.
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// Query execution failure from the backend driver.
    #[error("Query error: {message}")]
    Query { message: String },

    /// Configuration or initialization error.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        RepositoryError::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        RepositoryError::Validation {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        RepositoryError::Query {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        RepositoryError::Connection {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        RepositoryError::Configuration {
            message: message.into(),
        }
    }
}
