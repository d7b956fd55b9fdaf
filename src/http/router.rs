//! Router configuration for the HTTP API.
//!
//! The layer ordering matters: CORS wraps everything so pre-flight requests
//! get their empty 200 before any credential check can run; auth happens
//! inside the handlers, per route and verb.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::cors::cors_layer;
use super::handlers::{self, campsites, comments, favorites};
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/campsites",
            get(campsites::list)
                .post(campsites::create)
                .put(campsites::replace_collection)
                .delete(campsites::delete_all),
        )
        .route(
            "/campsites/{campsite_id}",
            get(campsites::get_one)
                .post(campsites::create_one)
                .put(campsites::update_one)
                .delete(campsites::delete_one),
        )
        .route(
            "/campsites/{campsite_id}/comments",
            get(comments::list)
                .post(comments::create)
                .put(comments::replace_collection)
                .delete(comments::delete_all),
        )
        .route(
            "/campsites/{campsite_id}/comments/{comment_id}",
            get(comments::get_one)
                .post(comments::create_one)
                .put(comments::update_one)
                .delete(comments::delete_one),
        )
        .route(
            "/favorites",
            get(favorites::get_own)
                .post(favorites::add_batch)
                .put(favorites::replace_collection)
                .delete(favorites::delete_all),
        )
        .route(
            "/favorites/{campsite_id}",
            get(favorites::get_one)
                .post(favorites::add_one)
                .put(favorites::replace_one)
                .delete(favorites::delete_one),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}
