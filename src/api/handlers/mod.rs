//! HTTP request handlers.

pub mod nav_handler;

pub use nav_handler::nav_routes;
