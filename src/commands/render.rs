//! Render command - Prints the navigation for one page.

use crate::cli::args::RenderArgs;
use crate::config::Config;
use crate::domain::{try_render, NavOptions, PageNav, QueryParams};
use crate::errors::{AppError, AppResult};
use crate::types::PageState;

/// Execute the render command
pub async fn execute(args: RenderArgs, config: Config) -> AppResult<()> {
    let nav = build(&args, &config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&nav)
            .map_err(|e| AppError::internal(format!("Failed to serialize navigation: {}", e)))?;
        println!("{}", json);
    } else {
        print_text(&nav);
    }

    Ok(())
}

/// Compute the navigation described by `args`.
pub fn build(args: &RenderArgs, config: &Config) -> AppResult<PageNav> {
    if args.page == 0 || args.page > args.pages.max(1) {
        return Err(AppError::bad_request(format!(
            "page must be between 1 and {}",
            args.pages.max(1)
        )));
    }

    let options = options(args, config);
    let ambient = match &args.query {
        Some(raw) => QueryParams::parse(raw)?,
        None => QueryParams::new(),
    };

    tracing::debug!(?options, "Rendering navigation");
    try_render(&PageState::new(args.page, args.pages), &options, &ambient)
}

fn options(args: &RenderArgs, config: &Config) -> NavOptions {
    let mut options = config.nav_options();
    options.adjacent = args.adjacent.unwrap_or(options.adjacent);
    options.caps = args.caps.unwrap_or(options.caps);
    options.url.base_url = args.url.clone();
    options.url.first_page_url = args.first_url.clone();
    if let Some(page_var) = &args.page_var {
        options.url.page_param = page_var.clone();
    }
    options
}

fn print_text(nav: &PageNav) {
    if !nav.is_navigable() {
        println!("(single page, nothing to navigate)");
        return;
    }

    println!("{}", nav);
    if let Some(previous) = &nav.previous_url {
        println!("previous: {}", previous);
    }
    for link in nav.links() {
        println!("{:>6}  {}", link.number, link.url);
    }
    if let Some(next) = &nav.next_url {
        println!("next:     {}", next);
    }
}
