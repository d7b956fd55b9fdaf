//! HTTP server module.
//!
//! An axum-based REST surface over the repository layer:
//!
//! ```text
//! Router → CORS → handler (auth gate, per verb) → repository → JSON
//! ```
//!
//! Every handler chain is a linear sequence of async store calls with no
//! internal parallelism; nothing here holds state across requests.

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
