//! Campground REST backend.
//!
//! CRUD endpoints for campsite resources, nested comment sub-resources and a
//! per-user favorites list, backed by a pluggable document store, with CORS
//! handling and an authentication gate in front of every mutating route.

pub mod auth;
pub mod config;
pub mod db;
pub mod http;
