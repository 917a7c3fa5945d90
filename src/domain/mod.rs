//! Navigation core.
//!
//! - **range**: which page numbers to show
//! - **query**: ambient query parameters and their source
//! - **url**: the URL each page links to
//! - **nav**: the display model handed to templates

pub mod nav;
pub mod query;
pub mod range;
pub mod url;

pub use nav::{render, render_optional, try_render, NavOptions, PageLink, PageNav};
pub use query::{QueryParams, QuerySource};
pub use range::{select_ranges, PageGroup};
pub use url::{build_url, PageUrlTemplate, UrlConfig};
