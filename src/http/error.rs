//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;
use crate::db::repository::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Referenced entity absent. One canonical 404 shape for every route.
    NotFound(String),
    /// Missing or invalid credential.
    Unauthorized(String),
    /// Verified caller lacks the required privilege (admin or ownership).
    Forbidden(String),
    /// Verb not implemented for this route. Responds 403 with the fixed
    /// plain-text message, mirroring the upstream API contract.
    Unsupported(String),
    /// Invalid request payload.
    BadRequest(String),
    /// Store failure, forwarded unmodified.
    Repository(RepositoryError),
}

impl AppError {
    /// Fixed message for verbs a route does not implement.
    pub fn unsupported(verb: &str, path: impl std::fmt::Display) -> Self {
        AppError::Unsupported(format!("{verb} operation not supported on {path}"))
    }

    /// Fixed message for a mutation on a resource the caller does not own.
    pub fn not_owner() -> Self {
        AppError::Forbidden("You are not authorized for this operation.".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ApiError::new("NOT_FOUND", msg)),
            )
                .into_response(),
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                Json(ApiError::new("UNAUTHORIZED", msg)),
            )
                .into_response(),
            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                Json(ApiError::new("FORBIDDEN", msg)),
            )
                .into_response(),
            // Plain text, not JSON: the upstream contract for unsupported
            // verbs is a bare message body with status 403.
            AppError::Unsupported(msg) => (StatusCode::FORBIDDEN, msg).into_response(),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("BAD_REQUEST", msg)),
            )
                .into_response(),
            AppError::Repository(err) => {
                let (status, code) = match err {
                    RepositoryError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    RepositoryError::Conflict { .. } => (StatusCode::CONFLICT, "CONFLICT"),
                    RepositoryError::Validation { .. } => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
                    }
                    RepositoryError::Connection { .. }
                    | RepositoryError::Query { .. }
                    | RepositoryError::Configuration { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "REPOSITORY_ERROR")
                    }
                };
                if status.is_server_error() {
                    tracing::error!(error = %err, "repository failure");
                }
                (status, Json(ApiError::new(code, err.to_string()))).into_response()
            }
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_maps_to_404() {
        let err = AppError::from(RepositoryError::not_found("Campsite", "c1"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = AppError::from(RepositoryError::conflict("duplicate name"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unsupported_is_plain_text_403() {
        let err = AppError::unsupported("PUT", "/campsites");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
