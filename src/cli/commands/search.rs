//! Search command - query an exported record file

use crate::cli::output::{colors, print_json, render_highlight};
use crate::cli::OutputFormat;
use crate::core::search::{QueryParams, SearchClient};
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query; every word must match
    pub query: String,

    /// Record file to search (defaults to `[output] path`)
    #[arg(long, short = 'i')]
    pub index: Option<PathBuf>,

    /// Page number, starting at 0
    #[arg(long, short = 'p', default_value = "0")]
    pub page: usize,

    /// Results per page (defaults to `[search] hits_per_page`)
    #[arg(long, short = 'n')]
    pub hits_per_page: Option<usize>,

    /// Include ranking details in each hit
    #[arg(long)]
    pub ranking_info: bool,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index_path = args
        .index
        .unwrap_or_else(|| services.config.output.path.clone());

    let index = services.open_index(&index_path).map_err(|e| {
        if e.is_not_found() {
            format!(
                "Record file '{}' not found. Run 'docsearch build' first.",
                index_path.display()
            )
        } else {
            e.to_string()
        }
    })?;

    let mut params = QueryParams::from_config(args.query, &services.config.search).with_page(args.page);
    if let Some(hits_per_page) = args.hits_per_page {
        params = params.with_hits_per_page(hits_per_page);
    }
    if args.ranking_info {
        params = params.with_ranking_info(true);
    }

    let results = index.search(&params).map_err(|e| {
        if e.is_bad_request() {
            format!("{e} (see 'docsearch show-config' for [search] limits)")
        } else {
            e.to_string()
        }
    })?;

    match format {
        OutputFormat::Human => {
            if results.hits.is_empty() {
                println!("No results for '{}'", results.query);
                return Ok(());
            }

            let first_rank = results.page * results.hits_per_page + 1;
            for (offset, hit) in results.hits.iter().enumerate() {
                println!(
                    "{} {}",
                    colors::rank(&format!("{}.", first_rank + offset)),
                    render_highlight(&hit.highlight.title.value)
                );
                println!("   {}", colors::dim(&hit.record.url));
                if !hit.record.description.is_empty() {
                    println!("   {}", render_highlight(&hit.highlight.description.value));
                }
            }

            println!(
                "\n{} results, page {} of {}",
                colors::number(&results.nb_hits.to_string()),
                colors::number(&(results.page + 1).to_string()),
                colors::number(&results.nb_pages.max(1).to_string())
            );
        }
        OutputFormat::Json => {
            print_json(&results)?;
        }
    }

    Ok(())
}
