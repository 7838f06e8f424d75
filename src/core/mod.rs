//! Core domain logic (interface-agnostic)
//!
//! This module contains all indexing and search logic, independent
//! of the command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Search records and run statistics
//! - **xdg**: XDG config directory handling
//! - **indexer**: Content walking, record extraction, export
//! - **search**: Query boundary and local record search
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocSearchError, Result};
pub use services::Services;
