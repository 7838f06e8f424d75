//! Config command - show current configuration

use crate::cli::output::{print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("  content:");
            println!("    root: {}", config.content.root.display());
            println!("    subfolders: {:?}", config.content.subfolders);
            println!("    exclude_files: {:?}", config.content.exclude_files);
            println!("    extensions: {:?}", config.content.extensions);
            println!("  output:");
            println!("    path: {}", config.output.path.display());
            println!("  records:");
            println!("    tag: {}", config.records.tag);
            println!("    url_prefix: {}", config.records.url_prefix);
            println!("    fallback_title: {}", config.records.fallback_title);
            println!("  search:");
            println!("    hits_per_page: {}", config.search.hits_per_page);
            println!("    max_hits_per_page: {}", config.search.max_hits_per_page);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("    click_analytics: {}", config.search.click_analytics);
            println!("    get_ranking_info: {}", config.search.get_ranking_info);
        }
        OutputFormat::Json => print_json(config)?,
    }

    Ok(())
}
