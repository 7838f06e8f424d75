//! docsearch - search index builder for documentation sites
//!
//! Walks a markdown content tree and exports one search record per
//! page plus one per heading, ready to upload to a hosted search
//! index keyed by `objectID`.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - indexer (walking, front-matter, headings, export)
//!   - search (query boundary, local preview)
//!   - services (shared service container)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```no_run
//! use docsearch::core::indexer::IndexingPipeline;
//! use docsearch::Config;
//!
//! let config = Config::default();
//! let stats = IndexingPipeline::from_config(&config)
//!     .run(&config.content.root, &config.output.path)
//!     .unwrap();
//! println!("{} records", stats.total_records);
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocSearchError, Result};
pub use core::services::Services;
pub use core::types::*;
