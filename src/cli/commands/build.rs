//! Build command - rebuild the search record file

use crate::cli::output::{colors, format_duration, print_json, print_success, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Content root (defaults to `[content] root`)
    #[arg(long, short = 'r')]
    pub root: Option<PathBuf>,

    /// Record file to write (defaults to `[output] path`)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Allow-listed subfolder (can be specified multiple times)
    #[arg(long, short = 's')]
    pub subfolder: Vec<String>,

    /// Filename to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub root: String,
    pub output: String,
    pub files_indexed: usize,
    pub page_records: usize,
    pub heading_records: usize,
    pub total_records: usize,
    pub duration_secs: f64,
}

/// Execute the build command
pub fn execute(
    args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut content = services.config.content.clone();
    if let Some(root) = args.root {
        content.root = root;
    }
    if !args.subfolder.is_empty() {
        content.subfolders = args.subfolder;
    }
    if !args.exclude.is_empty() {
        content.exclude_files = args.exclude;
    }
    let output = args
        .output
        .unwrap_or_else(|| services.config.output.path.clone());

    // Validate root
    if !content.root.is_dir() {
        return Err(format!(
            "Content root '{}' is not a directory. Pass --root or set [content] root.",
            content.root.display()
        )
        .into());
    }

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing {} into {}...",
            colors::file_path(&content.root.display().to_string()),
            colors::file_path(&output.display().to_string())
        );
    }

    let stats = services.create_pipeline(&content).run(&content.root, &output)?;

    let response = BuildResponse {
        root: content.root.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
        files_indexed: stats.files_indexed,
        page_records: stats.page_records,
        heading_records: stats.heading_records,
        total_records: stats.total_records,
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            if response.files_indexed == 0 {
                print_warning("No eligible files found; wrote an empty record file");
            }
            print_success("search index updated");
            println!(
                "{} files, {} records ({} pages, {} headings) in {}",
                colors::number(&response.files_indexed.to_string()),
                colors::number(&response.total_records.to_string()),
                colors::number(&response.page_records.to_string()),
                colors::number(&response.heading_records.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
        }
        OutputFormat::Json => {
            print_json(&response)?;
        }
    }

    Ok(())
}
