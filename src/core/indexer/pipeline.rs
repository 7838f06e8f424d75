//! Indexing pipeline orchestration.
//!
//! Coordinates one rebuild:
//! 1. Walk the content tree
//! 2. Read and parse each file into its record group
//! 3. Number all records
//! 4. Write the record file
//!
//! The first error aborts the run before anything is written.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::error::{DocSearchError, Result};
use crate::core::indexer::assembler::{write_records, RecordAssembler};
use crate::core::indexer::{ContentWalker, DocumentParser};
use crate::core::types::{DocumentRecords, IndexStats, SearchRecord};

/// Orchestrates the indexing pipeline
#[derive(Debug, Clone)]
pub struct IndexingPipeline {
    walker: ContentWalker,
    parser: DocumentParser,
}

impl IndexingPipeline {
    /// Create a pipeline from its two stages
    pub fn new(walker: ContentWalker, parser: DocumentParser) -> Self {
        Self { walker, parser }
    }

    /// Create a pipeline from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ContentWalker::from_config(&config.content),
            DocumentParser::new(config.records.clone(), config.content.extensions.clone()),
        )
    }

    /// Index a content root and return numbered records + stats
    ///
    /// # Arguments
    ///
    /// * `root` - Content root directory
    ///
    /// # Returns
    ///
    /// All records in walk order, or the first error encountered
    pub fn index_directory(&self, root: &Path) -> Result<(Vec<SearchRecord>, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Collecting content files from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} files to index", files.len());

        let mut assembler = RecordAssembler::new();
        let mut stats = IndexStats::default();

        for file_path in &files {
            let group = self.process_file(file_path, root)?;

            tracing::debug!(
                "Indexed {:?} ({} heading records)",
                file_path,
                group.headings.len()
            );

            stats.files_indexed += 1;
            stats.page_records += 1;
            stats.heading_records += group.headings.len();
            assembler.push(group);
        }

        let records = assembler.finish();
        stats.total_records = records.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexing complete: {} files, {} page records, \
             {} heading records in {}ms",
            stats.files_indexed,
            stats.page_records,
            stats.heading_records,
            stats.duration_ms
        );

        Ok((records, stats))
    }

    /// Index `root` and write the record file to `output`
    ///
    /// Nothing is written unless every file was indexed.
    pub fn run(&self, root: &Path, output: &Path) -> Result<IndexStats> {
        let (records, stats) = self.index_directory(root)?;
        write_records(&records, output)?;
        Ok(stats)
    }

    /// Process a single file: read contents and parse
    fn process_file(&self, path: &Path, root: &Path) -> Result<DocumentRecords> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                DocSearchError::IndexingFailed(format!("{path:?} is not valid UTF-8"))
            } else {
                DocSearchError::IndexingFailed(format!("Failed to read {path:?}: {e}"))
            }
        })?;

        self.parser.parse(&contents, path, root)
    }
}
