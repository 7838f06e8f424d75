//! Tests for the show-config command

use crate::cli::test_helpers::create_cli_test_services;
use docsearch::cli::commands::config::{execute, ConfigArgs};
use docsearch::cli::OutputFormat;

/// Test show-config human output
#[test]
fn test_config_human() {
    let (services, _out_temp) = create_cli_test_services();

    let result = execute(ConfigArgs {}, &services, OutputFormat::Human);
    assert!(result.is_ok());
}

/// Test show-config JSON output
#[test]
fn test_config_json() {
    let (services, _out_temp) = create_cli_test_services();

    let result = execute(ConfigArgs {}, &services, OutputFormat::Json);
    assert!(result.is_ok());
}

/// Test configuration serializes with its section names
#[test]
fn test_config_serializes_sections() {
    let (services, _out_temp) = create_cli_test_services();

    let json = serde_json::to_value(services.config.as_ref()).unwrap();
    for section in ["content", "output", "records", "search"] {
        assert!(json.get(section).is_some(), "missing section {section}");
    }
    assert_eq!(json["search"]["hits_per_page"], 10);
    assert_eq!(json["records"]["url_prefix"], "/docs");
}
