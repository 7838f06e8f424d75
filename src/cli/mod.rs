//! CLI adapter for docsearch
//!
//! Provides the command-line interface for building and previewing
//! the search index. Depends on `core/`; nothing in `core/` depends
//! on it.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docsearch - documentation search index builder
///
/// Rebuilds the search record file from a markdown content tree and
/// previews queries against it.
#[derive(Parser, Debug)]
#[command(name = "docsearch")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Documentation search index builder", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the search record file from the content tree
    Build(commands::BuildArgs),

    /// Search an exported record file
    Search(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsearch completions bash > ~/.local/share/bash-completion/completions/docsearch
    ///   zsh:   docsearch completions zsh > ~/.zfunc/_docsearch
    ///   fish:  docsearch completions fish > ~/.config/fish/completions/docsearch.fish
    Completions(commands::CompletionsArgs),
}

impl Cli {
    /// Default tracing filter for the requested verbosity
    ///
    /// `info` by default, `warn` for `build --quiet`, `debug` with `-v`.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose > 0 {
            return "docsearch=debug";
        }
        match &self.command {
            Commands::Build(args) if args.quiet => "docsearch=warn",
            _ => "docsearch=info",
        }
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need configuration)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &services, cli.format),
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
