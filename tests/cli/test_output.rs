//! Tests for CLI output formatting helpers
//!
//! Tests the output formatting utilities:
//! - Duration formatting (ms, s, m)
//! - Highlight rendering
//! - Print helpers (print_json, print_success, print_warning, print_error)

use docsearch::cli::output::{
    format_duration, print_error, print_header, print_json, print_success, print_warning,
    render_highlight,
};
use docsearch::core::types::IndexStats;

// =============================================================================
// format_duration tests
// =============================================================================

/// Test duration formatting with various times
#[test]
fn test_format_duration_various_times() {
    // Milliseconds
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.042), "42ms");
    assert_eq!(format_duration(0.999), "999ms");

    // Seconds
    assert_eq!(format_duration(1.0), "1.00s");
    assert_eq!(format_duration(12.5), "12.50s");

    // Minutes
    assert_eq!(format_duration(60.0), "1m 0.0s");
    assert_eq!(format_duration(125.5), "2m 5.5s");
}

// =============================================================================
// render_highlight tests
// =============================================================================

/// Test highlight markers are stripped when color is disabled
#[test]
fn test_render_highlight_without_color() {
    colored::control::set_override(false);

    assert_eq!(
        render_highlight("<em>Work</em>spaces and <em>work</em>"),
        "Workspaces and work"
    );
    assert_eq!(render_highlight(""), "");
    assert_eq!(render_highlight("</em> stray close"), "</em> stray close");
    assert_eq!(render_highlight("Café <em>Öl</em> 🚀"), "Café Öl 🚀");

    colored::control::unset_override();
}

// =============================================================================
// print helper tests
// =============================================================================

/// Test print helpers do not panic
#[test]
fn test_print_helpers() {
    print_success("done");
    print_warning("careful");
    print_error("failed");
    print_header("Header");
}

/// Test JSON printing of serializable values
#[test]
fn test_print_json() {
    assert!(print_json(&IndexStats::default()).is_ok());
    assert!(print_json(&vec!["a", "b"]).is_ok());
}
