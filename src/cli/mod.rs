//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `render` - Print the navigation for a page
//! - `serve` - Start the HTTP server

pub mod args;

pub use args::{Cli, Commands};
