//! docsearch CLI - rebuild and preview the documentation search index
//!
//! # Examples
//!
//! ```bash
//! # Rebuild search.json from src/content/docs
//! docsearch build
//!
//! # Build from another tree into another file
//! docsearch build --root site/docs --output public/search.json
//!
//! # Preview a query against the exported records
//! docsearch search "git provider"
//!
//! # Show configuration
//! docsearch show-config
//! ```

use clap::Parser;
use docsearch::cli::output::print_error;
use docsearch::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)) // stdout carries command output
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
