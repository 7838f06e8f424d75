//! Unified service container for docsearch
//!
//! Provides shared access to configuration and builds per-command
//! pipelines and indexes from it.

use crate::core::config::{Config, ContentConfig};
use crate::core::error::Result;
use crate::core::indexer::{ContentWalker, DocumentParser, IndexingPipeline};
use crate::core::search::RecordIndex;
use std::path::Path;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create an IndexingPipeline with request-specific content settings
    ///
    /// Record settings always come from the loaded configuration.
    pub fn create_pipeline(&self, content: &ContentConfig) -> IndexingPipeline {
        IndexingPipeline::new(
            ContentWalker::from_config(content),
            DocumentParser::new(self.config.records.clone(), content.extensions.clone()),
        )
    }

    /// Open an exported record file for local search
    pub fn open_index(&self, path: &Path) -> Result<RecordIndex> {
        RecordIndex::load(path, self.config.search.clone())
    }
}
