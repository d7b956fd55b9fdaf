//! Authentication gate.
//!
//! The gate is an external collaborator with a fixed contract: it verifies
//! an opaque bearer credential to a user [`Identity`] and resolves user ids
//! to public fields for population. The HTTP layer never inspects
//! credentials itself.
//!
//! [`StaticAuthGate`] is a token-table implementation for development and
//! tests; production deployments wire a real verifier behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

/// A verified caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    /// Administrative privilege flag.
    pub admin: bool,
}

impl Identity {
    pub fn public(&self) -> UserPublic {
        UserPublic {
            id: self.user_id.clone(),
            username: self.username.clone(),
        }
    }
}

/// Public fields of a referenced user, safe to embed in responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPublic {
    pub id: String,
    pub username: String,
}

/// Credential verification failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("credentials required")]
    MissingCredential,
    #[error("invalid credentials")]
    InvalidCredential,
}

/// Verifies request credentials and resolves user references.
#[async_trait]
pub trait AuthGate: Send + Sync {
    /// Verify an opaque credential and resolve it to an identity.
    async fn verify_user(&self, credential: &str) -> Result<Identity, AuthError>;

    /// Look up the public fields of a referenced user, `None` if unknown.
    async fn lookup_user(&self, user_id: &str) -> Option<UserPublic>;
}

/// Extract the bearer credential from request headers.
pub fn bearer_credential(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;
    let value = value.to_str().map_err(|_| AuthError::InvalidCredential)?;
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::InvalidCredential)
}

/// Static token-table gate for development and tests.
///
/// Entries come from `AUTH_TOKENS`, a comma-separated list of
/// `token:user_id:username[:admin]`.
#[derive(Default)]
pub struct StaticAuthGate {
    tokens: HashMap<String, Identity>,
}

impl StaticAuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for a user identity.
    pub fn with_user(
        mut self,
        token: impl Into<String>,
        user_id: impl Into<String>,
        username: impl Into<String>,
        admin: bool,
    ) -> Self {
        self.tokens.insert(
            token.into(),
            Identity {
                user_id: user_id.into(),
                username: username.into(),
                admin,
            },
        );
        self
    }

    /// Build the token table from the `AUTH_TOKENS` environment variable.
    /// Malformed entries are skipped.
    pub fn from_env() -> Self {
        let mut gate = Self::new();
        let Ok(raw) = std::env::var("AUTH_TOKENS") else {
            return gate;
        };
        for entry in raw.split(',') {
            let mut parts = entry.trim().split(':');
            let (Some(token), Some(user_id), Some(username)) =
                (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };
            if token.is_empty() || user_id.is_empty() {
                continue;
            }
            let admin = parts.next() == Some("admin");
            gate = gate.with_user(token, user_id, username, admin);
        }
        gate
    }
}

#[async_trait]
impl AuthGate for StaticAuthGate {
    async fn verify_user(&self, credential: &str) -> Result<Identity, AuthError> {
        self.tokens
            .get(credential)
            .cloned()
            .ok_or(AuthError::InvalidCredential)
    }

    async fn lookup_user(&self, user_id: &str) -> Option<UserPublic> {
        self.tokens
            .values()
            .find(|identity| identity.user_id == user_id)
            .map(Identity::public)
    }
}
