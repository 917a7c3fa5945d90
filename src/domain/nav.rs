//! Navigation display model.
//!
//! Ties range selection and URL building together into a [`PageNav`] that a
//! template (or the CLI) can render directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::query::QuerySource;
use super::range::select_ranges;
use super::url::{build_url, UrlConfig};
use crate::config::{DEFAULT_ADJACENT, DEFAULT_CAPS, DEFAULT_TEMPLATE};
use crate::errors::AppResult;
use crate::types::PageState;

/// Options controlling which pages are shown and how they link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    /// Pages shown on each side of the current page
    pub adjacent: u32,
    /// Pages pinned at the start and the end
    pub caps: u32,
    /// Template name for the rendering collaborator
    pub template: String,
    #[serde(flatten)]
    pub url: UrlConfig,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            adjacent: DEFAULT_ADJACENT,
            caps: DEFAULT_CAPS,
            template: DEFAULT_TEMPLATE.to_string(),
            url: UrlConfig::default(),
        }
    }
}

/// A single page entry in the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u32,
    pub url: String,
    pub current: bool,
}

/// Everything a template needs to draw the navigation.
///
/// `pages` holds contiguous groups; an ellipsis belongs between groups.
/// The default value is the empty model, which renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageNav {
    pub num_pages: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Vec<PageLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
}

impl PageNav {
    /// Whether there is anything to navigate to.
    pub fn is_navigable(&self) -> bool {
        !self.pages.is_empty()
    }

    /// Every link in display order, ignoring grouping.
    pub fn links(&self) -> impl Iterator<Item = &PageLink> {
        self.pages.iter().flatten()
    }

    pub fn current(&self) -> Option<&PageLink> {
        self.links().find(|link| link.current)
    }
}

/// Plain-text rendering, e.g. `1 ... 4 5 6 [7] 8 9 10 ... 20`.
impl fmt::Display for PageNav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.pages.iter().enumerate() {
            if i > 0 {
                f.write_str(" ... ")?;
            }
            for (j, link) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if link.current {
                    write!(f, "[{}]", link.number)?;
                } else {
                    write!(f, "{}", link.number)?;
                }
            }
        }
        Ok(())
    }
}

/// Build the navigation, propagating the first URL failure.
pub fn try_render(
    page: &PageState,
    options: &NavOptions,
    ambient: &dyn QuerySource,
) -> AppResult<PageNav> {
    let num_pages = page.num_pages;
    if num_pages < 2 {
        return Ok(PageNav {
            num_pages,
            ..PageNav::default()
        });
    }

    let current = page.number;
    let link_url = |number: u32| build_url(number, &options.url, ambient);

    let pages = select_ranges(current, num_pages, options.adjacent, options.caps)
        .into_iter()
        .map(|group| {
            group
                .pages()
                .map(|number| -> AppResult<PageLink> {
                    Ok(PageLink {
                        number,
                        url: link_url(number)?,
                        current: number == current,
                    })
                })
                .collect::<AppResult<Vec<_>>>()
        })
        .collect::<AppResult<Vec<_>>>()?;

    let previous_url = if page.has_previous() {
        Some(link_url(current - 1)?)
    } else {
        None
    };
    let next_url = if page.has_next() {
        Some(link_url(current + 1)?)
    } else {
        None
    };

    Ok(PageNav {
        num_pages,
        pages,
        previous_url,
        next_url,
    })
}

/// Build the navigation, or the empty model if any URL cannot be built.
///
/// Partial navigation is never returned.
pub fn render(page: &PageState, options: &NavOptions, ambient: &dyn QuerySource) -> PageNav {
    match try_render(page, options, ambient) {
        Ok(nav) => {
            tracing::debug!(
                page = page.number,
                num_pages = page.num_pages,
                links = nav.links().count(),
                "rendered page navigation"
            );
            nav
        }
        Err(e) => {
            tracing::warn!("Dropping page navigation: {}", e);
            PageNav::default()
        }
    }
}

/// Like [`render`], treating a missing page as nothing to render.
pub fn render_optional(
    page: Option<&PageState>,
    options: &NavOptions,
    ambient: &dyn QuerySource,
) -> PageNav {
    page.map(|page| render(page, options, ambient)).unwrap_or_default()
}
