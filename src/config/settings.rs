//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_ADJACENT, DEFAULT_CAPS, DEFAULT_PAGE_VAR, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TEMPLATE,
};
use crate::domain::{NavOptions, UrlConfig};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub adjacent: u32,
    pub caps: u32,
    pub page_var: String,
    pub template: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adjacent: DEFAULT_ADJACENT,
            caps: DEFAULT_CAPS,
            page_var: DEFAULT_PAGE_VAR.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first when present. Missing or unparsable values fall
    /// back to the defaults in [`super::constants`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars()
    }

    /// Load configuration after reading the given env file.
    pub fn from_env_file(path: &str) -> Self {
        if let Err(e) = dotenvy::from_filename(path) {
            tracing::warn!("Could not load env file {}: {}", path, e);
        }
        Self::from_vars()
    }

    fn from_vars() -> Self {
        let defaults = Self::default();

        Self {
            adjacent: parse_var("PAGINAV_ADJACENT").unwrap_or(defaults.adjacent),
            caps: parse_var("PAGINAV_CAPS").unwrap_or(defaults.caps),
            page_var: env::var("PAGINAV_PAGE_VAR")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.page_var),
            template: env::var("PAGINAV_TEMPLATE").unwrap_or(defaults.template),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }

    /// Default navigation options derived from this configuration.
    pub fn nav_options(&self) -> NavOptions {
        NavOptions {
            adjacent: self.adjacent,
            caps: self.caps,
            template: self.template.clone(),
            url: UrlConfig {
                page_param: self.page_var.clone(),
                ..UrlConfig::default()
            },
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}={:?}", name, raw);
            None
        }
    }
}
