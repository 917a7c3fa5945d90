//! paginav - Digg-style pagination navigation
//!
//! Decides which page numbers a paginator shows (first and last capped
//! pages, a window around the current page, gaps in between) and which URL
//! each page links to.
//!
//! # Layers
//!
//! - **domain**: range selection, URL building, the navigation model
//! - **types**: pagination state
//! - **config**: defaults and environment settings
//! - **api**: HTTP handlers and extractors (axum)
//! - **cli** / **commands**: command-line interface
//! - **errors**: centralized error handling
//!
//! # Example
//!
//! ```
//! use paginav::{render, NavOptions, PageState, QueryParams};
//!
//! let ambient = QueryParams::parse("sort=asc").unwrap();
//! let nav = render(&PageState::new(7, 20), &NavOptions::default(), &ambient);
//!
//! assert_eq!(nav.to_string(), "1 ... 4 5 6 [7] 8 9 10 ... 20");
//! assert_eq!(nav.previous_url.as_deref(), Some("?sort=asc&page=6"));
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{
    build_url, render, select_ranges, try_render, NavOptions, PageGroup, PageLink, PageNav,
    QueryParams, QuerySource, UrlConfig,
};
pub use errors::{AppError, AppResult};
pub use types::PageState;
