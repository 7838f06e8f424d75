//! Core data types for docsearch.
//!
//! Records are built in two stages: drafts produced per file by the
//! parser and heading segmenter, then numbered `SearchRecord`s
//! produced by the assembler.

use serde::{Deserialize, Serialize};

/// A search record before it has been assigned an `objectID`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Display label, never empty
    pub title: String,

    /// Plain-text summary with link markup resolved
    pub description: String,

    /// Content category
    pub tag: String,

    /// Site-relative URL, with a fragment for heading records
    pub url: String,

    /// Path-derived identifier
    pub slug: String,
}

/// The unit persisted to the search index
///
/// Field order matches the exported JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub title: String,
    pub description: String,
    pub tag: String,
    pub url: String,
    pub slug: String,

    /// 1-based position in the exported array
    #[serde(rename = "objectID")]
    pub object_id: u64,
}

impl SearchRecord {
    /// Number a draft
    pub fn from_draft(draft: RecordDraft, object_id: u64) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            tag: draft.tag,
            url: draft.url,
            slug: draft.slug,
            object_id,
        }
    }

    /// Whether this record points at a heading inside a page
    pub fn is_heading(&self) -> bool {
        self.slug.contains('#')
    }
}

/// All records extracted from one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecords {
    /// The page-level record
    pub page: RecordDraft,

    /// One record per heading, in document order
    pub headings: Vec<RecordDraft>,
}

impl DocumentRecords {
    /// Total number of records in this group
    pub fn len(&self) -> usize {
        1 + self.headings.len()
    }

    /// A group always holds at least its page record
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl IntoIterator for DocumentRecords {
    type Item = RecordDraft;
    type IntoIter = std::iter::Chain<std::iter::Once<RecordDraft>, std::vec::IntoIter<RecordDraft>>;

    /// Page record first, then its headings
    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.page).chain(self.headings)
    }
}

/// Statistics from an indexing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of source files indexed
    pub files_indexed: usize,

    /// Page-level records (one per file)
    pub page_records: usize,

    /// Heading-level records
    pub heading_records: usize,

    /// Total records written
    pub total_records: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
