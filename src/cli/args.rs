//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// paginav - Digg-style page navigation
#[derive(Parser, Debug)]
#[command(name = "paginav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file to load settings from (defaults to .env)
    #[arg(short, long, global = true, env = "PAGINAV_ENV_FILE")]
    pub env_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the navigation for a page
    Render(RenderArgs),

    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Current page
    #[arg(long)]
    pub page: u32,

    /// Total number of pages
    #[arg(long)]
    pub pages: u32,

    /// Pages on each side of the current page
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(..=100))]
    pub adjacent: Option<u32>,

    /// Pages pinned at the start and end
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(..=100))]
    pub caps: Option<u32>,

    /// Base URL; a single `1` in it is replaced by the page number
    #[arg(short, long)]
    pub url: Option<String>,

    /// URL for the first page
    #[arg(long)]
    pub first_url: Option<String>,

    /// Query parameter carrying the page number
    #[arg(long)]
    pub page_var: Option<String>,

    /// Existing query string to preserve in links (e.g. "sort=asc")
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render() {
        let cli = Cli::parse_from([
            "paginav", "render", "--page", "7", "--pages", "20", "-a", "1", "--json",
        ]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.page, 7);
                assert_eq!(args.pages, 20);
                assert_eq!(args.adjacent, Some(1));
                assert_eq!(args.caps, None);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn render_rejects_oversized_window() {
        for flag in ["--adjacent", "--caps"] {
            let result = Cli::try_parse_from([
                "paginav", "render", "--page", "1", "--pages", "5", flag, "4294967295",
            ]);
            assert!(result.is_err(), "{flag} accepted");
        }

        let cli = Cli::try_parse_from([
            "paginav", "render", "--page", "1", "--pages", "5", "--caps", "100",
        ])
        .unwrap();
        match cli.command {
            Commands::Render(args) => assert_eq!(args.caps, Some(100)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_serve_with_global_flag() {
        let cli = Cli::parse_from(["paginav", "serve", "-p", "8080", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.host, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
