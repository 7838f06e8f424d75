//! Tests for the build command
//!
//! Tests the build command handler with various scenarios:
//! - Default and overridden roots and outputs
//! - Subfolder and exclusion overrides
//! - Invalid roots and malformed content
//! - Output format variations

use crate::cli::test_helpers::{create_cli_test_services, create_test_content, sample_docs};
use crate::common::read_output;
use docsearch::cli::commands::build::{execute, BuildArgs};
use docsearch::cli::OutputFormat;

/// Test build writes records to the configured output path
#[test]
fn test_build_default_output_human() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();

    let args = BuildArgs {
        root: Some(content.path().to_path_buf()),
        quiet: true,
        ..Default::default()
    };

    let result = execute(args, &services, OutputFormat::Human);
    assert!(result.is_ok(), "Build should succeed: {:?}", result.err());

    let values = read_output(&services.config.output.path);
    assert_eq!(values.len(), 4);
    assert_eq!(values[0]["slug"], "/configuration/providers");
    assert_eq!(values[3]["slug"], "/usage/workspaces#creating-a-workspace");
}

/// Test build in JSON format with an explicit output path
#[test]
fn test_build_explicit_output_json() {
    let (services, out_temp) = create_cli_test_services();
    let content = sample_docs();
    let output = out_temp.path().join("public/search.json");

    let args = BuildArgs {
        root: Some(content.path().to_path_buf()),
        output: Some(output.clone()),
        ..Default::default()
    };

    let result = execute(args, &services, OutputFormat::Json);
    assert!(result.is_ok(), "Build should succeed: {:?}", result.err());
    assert!(output.exists());
    assert!(!services.config.output.path.exists());
}

/// Test subfolder override narrows the walk
#[test]
fn test_build_subfolder_override() {
    let (services, _out_temp) = create_cli_test_services();
    let content = sample_docs();

    let args = BuildArgs {
        root: Some(content.path().to_path_buf()),
        subfolder: vec!["usage".to_string()],
        quiet: true,
        ..Default::default()
    };

    execute(args, &services, OutputFormat::Json).unwrap();

    let values = read_output(&services.config.output.path);
    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| v["slug"]
        .as_str()
        .unwrap()
        .starts_with("/usage/")));
}

/// Test exclusion override replaces the default list
#[test]
fn test_build_exclude_override() {
    let (services, _out_temp) = create_cli_test_services();
    let content = create_test_content(&[
        ("usage/404.md", "# Not found\n"),
        ("usage/skip.md", "# Skip me\n"),
    ]);

    let args = BuildArgs {
        root: Some(content.path().to_path_buf()),
        exclude: vec!["skip.md".to_string()],
        quiet: true,
        ..Default::default()
    };

    execute(args, &services, OutputFormat::Json).unwrap();

    let values = read_output(&services.config.output.path);
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["slug"], "/usage/404");
}

/// Test build with a root that does not exist
#[test]
fn test_build_missing_root() {
    let (services, out_temp) = create_cli_test_services();

    let args = BuildArgs {
        root: Some(out_temp.path().join("nope")),
        ..Default::default()
    };

    let result = execute(args, &services, OutputFormat::Human);
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("not a directory"), "Unexpected error: {msg}");
}

/// Test build surfaces front-matter failures and writes nothing
#[test]
fn test_build_malformed_front_matter() {
    let (services, _out_temp) = create_cli_test_services();
    let content = create_test_content(&[("usage/bad.md", "---\ntitle: Broken\n")]);

    let args = BuildArgs {
        root: Some(content.path().to_path_buf()),
        quiet: true,
        ..Default::default()
    };

    let result = execute(args, &services, OutputFormat::Human);
    assert!(result.is_err());
    assert!(!services.config.output.path.exists());
}

/// Test build of a tree with no eligible files
#[test]
fn test_build_empty_content() {
    let (services, _out_temp) = create_cli_test_services();
    let content = create_test_content(&[("blog/post.md", "# Post\n")]);

    let args = BuildArgs {
        root: Some(content.path().to_path_buf()),
        quiet: true,
        ..Default::default()
    };

    execute(args, &services, OutputFormat::Human).unwrap();
    assert!(read_output(&services.config.output.path).is_empty());
}
