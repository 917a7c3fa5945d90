//! API layer - HTTP handlers and extractors
//!
//! Exposes the page navigation as JSON:
//! - Request handlers
//! - Custom extractors (validated query, ambient query)
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
