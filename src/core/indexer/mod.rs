//! Search record indexing module.
//!
//! Turns a markdown content tree into the flat record array uploaded
//! to the hosted search index:
//!
//! - Content walking with allow-listed subfolders
//! - Front-matter splitting and body cleanup
//! - Page and heading record extraction
//! - Record numbering and export
//!
//! A run is all-or-nothing: the first unreadable file or malformed
//! front-matter block aborts it before the output is touched.

pub mod assembler;
pub mod document;
pub mod frontmatter;
pub mod headings;
pub mod pipeline;
pub mod text;
pub mod walker;

pub use assembler::RecordAssembler;
pub use document::DocumentParser;
pub use headings::HeadingSegmenter;
pub use pipeline::IndexingPipeline;
pub use walker::ContentWalker;
