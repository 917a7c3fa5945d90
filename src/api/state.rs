//! Application state shared by handlers.

use crate::config::Config;
use crate::domain::NavOptions;

/// Application state.
///
/// Holds only immutable defaults, so cloning per request is cheap.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Navigation options used when a request does not override them
    pub nav_defaults: NavOptions,
}

impl AppState {
    pub fn new(nav_defaults: NavOptions) -> Self {
        Self { nav_defaults }
    }

    /// Create application state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.nav_options())
    }
}
