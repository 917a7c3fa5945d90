//! Page navigation handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::{AmbientQuery, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{try_render, NavOptions, PageNav};
use crate::errors::{AppError, AppResult};
use crate::types::PageState;

/// Query parameters read by [`NavQuery`]; never copied into page links.
const NAV_QUERY_KEYS: &[&str] = &[
    "page", "pages", "adjacent", "caps", "url", "first_url", "page_var",
];

/// Navigation request.
///
/// Any other parameters in the query string are carried into the page links.
#[derive(Debug, Deserialize, Validate)]
pub struct NavQuery {
    /// Current page
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u32,
    /// Total number of pages
    #[validate(range(max = 1000000000, message = "pages must be at most 1000000000"))]
    pub pages: u32,
    #[validate(range(max = 100, message = "adjacent must be at most 100"))]
    pub adjacent: Option<u32>,
    #[validate(range(max = 100, message = "caps must be at most 100"))]
    pub caps: Option<u32>,
    /// Base URL, optionally with a `1` page placeholder
    pub url: Option<String>,
    pub first_url: Option<String>,
    pub page_var: Option<String>,
}

impl NavQuery {
    /// Overlay the request's settings on the server defaults.
    fn options(&self, defaults: &NavOptions) -> NavOptions {
        let mut options = defaults.clone();
        if let Some(adjacent) = self.adjacent {
            options.adjacent = adjacent;
        }
        if let Some(caps) = self.caps {
            options.caps = caps;
        }
        if let Some(url) = &self.url {
            options.url.base_url = Some(url.clone());
        }
        if let Some(first_url) = &self.first_url {
            options.url.first_page_url = Some(first_url.clone());
        }
        if let Some(page_var) = self.page_var.as_ref().filter(|v| !v.is_empty()) {
            options.url.page_param = page_var.clone();
        }
        options
    }
}

/// Create navigation routes
pub fn nav_routes() -> Router<AppState> {
    Router::new().route("/", get(page_nav))
}

/// Compute the navigation for a page
pub async fn page_nav(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<NavQuery>,
    ambient: AmbientQuery,
) -> AppResult<Json<PageNav>> {
    if query.page > query.pages.max(1) {
        return Err(AppError::bad_request(format!(
            "page {} is past the last page {}",
            query.page, query.pages
        )));
    }

    let options = query.options(&state.nav_defaults);
    let page = PageState::new(query.page, query.pages);

    let ambient = ambient.without_keys(NAV_QUERY_KEYS);
    let nav = try_render(&page, &options, &ambient)?;
    Ok(Json(nav))
}
