//! Page URL construction.

use serde::{Deserialize, Serialize};

use super::query::QuerySource;
use crate::config::{DEFAULT_PAGE_VAR, PAGE_PLACEHOLDER, SAME_PAGE_URL};
use crate::errors::AppResult;

/// How page URLs are formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Base URL. When it contains exactly one `1`, that character is replaced
    /// by the page number (`/browse/1/` becomes `/browse/7/`). Otherwise the
    /// page goes into the query string appended to it.
    #[serde(default)]
    pub base_url: Option<String>,
    /// URL used for page 1 instead of anything computed.
    #[serde(default)]
    pub first_page_url: Option<String>,
    /// Query parameter carrying the page number.
    #[serde(default = "default_page_param")]
    pub page_param: String,
}

fn default_page_param() -> String {
    DEFAULT_PAGE_VAR.to_string()
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            first_page_url: None,
            page_param: default_page_param(),
        }
    }
}

impl UrlConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_first_page_url(mut self, url: impl Into<String>) -> Self {
        self.first_page_url = Some(url.into());
        self
    }

    pub fn with_page_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = param.into();
        self
    }

    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.is_empty())
    }

    fn first_page_url(&self) -> Option<&str> {
        self.first_page_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Path-style template, if the base URL has exactly one placeholder.
    pub fn template(&self) -> Option<PageUrlTemplate<'_>> {
        self.base_url().and_then(PageUrlTemplate::parse)
    }
}

/// A URL split around its single page-number placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageUrlTemplate<'a> {
    prefix: &'a str,
    suffix: &'a str,
}

impl<'a> PageUrlTemplate<'a> {
    /// Split `url` at its placeholder. `None` unless there is exactly one.
    pub fn parse(url: &'a str) -> Option<Self> {
        let (prefix, suffix) = url.split_once(PAGE_PLACEHOLDER)?;
        if suffix.contains(PAGE_PLACEHOLDER) {
            return None;
        }
        Some(Self { prefix, suffix })
    }

    pub fn render(&self, number: u32) -> String {
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}

/// Build the URL for page `number`.
///
/// The ambient query is only read when neither the first-page override nor
/// a path template applies; an unreadable source is the sole failure.
pub fn build_url(number: u32, config: &UrlConfig, ambient: &dyn QuerySource) -> AppResult<String> {
    if number == 1 {
        if let Some(first) = config.first_page_url() {
            return Ok(first.to_string());
        }
    }

    if let Some(template) = config.template() {
        return Ok(template.render(number));
    }

    let params = ambient.query_params()?;
    let params = if number == 1 {
        params.without(&config.page_param)
    } else {
        params.with(&config.page_param, number.to_string())
    };

    let query = params.encode();
    let base = config.base_url();

    if base.is_none() && query.is_empty() {
        return Ok(SAME_PAGE_URL.to_string());
    }

    let mut url = base.unwrap_or_default().to_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    Ok(url)
}
