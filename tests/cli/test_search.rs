//! Tests for the search command
//!
//! Tests the search command handler with various scenarios:
//! - Valid queries with results
//! - Empty results
//! - Missing record file errors
//! - Invalid queries
//! - Output format variations

use crate::cli::test_helpers::{create_cli_test_services, sample_docs, setup_built_index};
use docsearch::cli::commands::search::{execute, SearchArgs};
use docsearch::cli::OutputFormat;

fn search_args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        index: None,
        page: 0,
        hits_per_page: None,
        ranking_info: false,
    }
}

/// Test search with valid query returning results
#[test]
fn test_search_valid_query_human() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();
    setup_built_index(&services, &content);

    let result = execute(search_args("workspace"), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search with valid query in JSON format
#[test]
fn test_search_valid_query_json() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();
    setup_built_index(&services, &content);

    let mut args = search_args("gitlab");
    args.ranking_info = true;
    args.hits_per_page = Some(5);

    let result = execute(args, &services, OutputFormat::Json);
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search with no matching records
#[test]
fn test_search_no_results() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();
    setup_built_index(&services, &content);

    let result = execute(search_args("kubernetes"), &services, OutputFormat::Human);
    assert!(result.is_ok());
}

/// Test search with an explicit record file
#[test]
fn test_search_explicit_index() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();
    let index = setup_built_index(&services, &content);

    let mut args = search_args("providers");
    args.index = Some(index);

    assert!(execute(args, &services, OutputFormat::Json).is_ok());
}

/// Test search before any build
#[test]
fn test_search_missing_index() {
    let (services, _out_temp) = create_cli_test_services();

    let result = execute(search_args("workspace"), &services, OutputFormat::Human);
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("docsearch build"), "Unexpected error: {msg}");
}

/// Test search with an empty query
#[test]
fn test_search_empty_query() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();
    setup_built_index(&services, &content);

    let result = execute(search_args(""), &services, OutputFormat::Human);
    assert!(result.is_err());
}

/// Test search with a page size over the configured maximum
#[test]
fn test_search_hits_per_page_too_large() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();
    setup_built_index(&services, &content);

    let mut args = search_args("workspace");
    args.hits_per_page = Some(1000);

    let result = execute(args, &services, OutputFormat::Json);
    assert!(result.is_err());
}
