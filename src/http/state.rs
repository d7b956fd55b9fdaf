//! Application state for the HTTP server.

use std::sync::Arc;

use crate::auth::AuthGate;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for document-store operations
    pub repository: Arc<dyn FullRepository>,
    /// Credential verifier and user resolver
    pub auth: Arc<dyn AuthGate>,
}

impl AppState {
    pub fn new(repository: Arc<dyn FullRepository>, auth: Arc<dyn AuthGate>) -> Self {
        Self { repository, auth }
    }
}
