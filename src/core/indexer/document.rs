//! Page-level record extraction.
//!
//! Turns one file's raw text into its page record and, via the
//! heading segmenter, its heading records:
//! 1. Split front-matter from body
//! 2. Drop `import`/`export` lines and trim
//! 3. Title from front-matter, first H1, or the fallback label
//! 4. Description from the first sentence, links resolved
//! 5. Slug from the path relative to the content root

use std::path::{Component, Path};

use crate::core::config::RecordsConfig;
use crate::core::error::{DocSearchError, Result};
use crate::core::indexer::frontmatter::split_front_matter;
use crate::core::indexer::headings::{parse_heading_line, HeadingSegmenter};
use crate::core::indexer::text::{first_sentence, is_declaration_line, resolve_links};
use crate::core::types::{DocumentRecords, RecordDraft};

/// Builds records for a single source document
#[derive(Debug, Clone)]
pub struct DocumentParser {
    records: RecordsConfig,
    extensions: Vec<String>,
    segmenter: HeadingSegmenter,
}

impl DocumentParser {
    /// Create a parser
    ///
    /// # Arguments
    ///
    /// * `records` - Tag, URL prefix and fallback title for records
    /// * `extensions` - Markup extensions stripped from slugs
    pub fn new(records: RecordsConfig, extensions: Vec<String>) -> Self {
        let segmenter = HeadingSegmenter::new(records.tag.clone(), records.url_prefix.clone());
        Self {
            records,
            extensions,
            segmenter,
        }
    }

    /// Parse one document's text into its record group
    ///
    /// `path` is the file's location and `root` the content root; the
    /// slug is derived from the path between them.
    ///
    /// # Errors
    ///
    /// Returns `FrontMatter` for malformed front-matter and
    /// `InvalidPath` if `path` is not under `root`.
    pub fn parse(&self, source: &str, path: &Path, root: &Path) -> Result<DocumentRecords> {
        let split = split_front_matter(source).map_err(|e| DocSearchError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let body = clean_body(split.body);
        let slug = self.slug_for(path, root)?;

        let title = split
            .metadata
            .title()
            .or_else(|| first_h1(&body))
            .unwrap_or_else(|| self.records.fallback_title.clone());

        let page = RecordDraft {
            title,
            description: resolve_links(&first_sentence(&body)),
            tag: self.records.tag.clone(),
            url: format!("{}{}", self.records.url_prefix, slug),
            slug: slug.clone(),
        };

        let headings = self.segmenter.segment(&body, &slug);

        Ok(DocumentRecords { page, headings })
    }

    /// Slug for `path` relative to `root`: leading `/`, forward
    /// slashes, markup extension removed.
    pub fn slug_for(&self, path: &Path, root: &Path) -> Result<String> {
        let relative = path.strip_prefix(root).map_err(|_| {
            DocSearchError::InvalidPath(format!(
                "{} is not under content root {}",
                path.display(),
                root.display()
            ))
        })?;

        let mut slug = String::new();
        for component in relative.components() {
            if let Component::Normal(part) = component {
                slug.push('/');
                slug.push_str(&part.to_string_lossy());
            }
        }

        Ok(self.strip_extension(slug))
    }

    fn strip_extension(&self, slug: String) -> String {
        for ext in &self.extensions {
            if let Some(stem) = slug.strip_suffix(ext.as_str()) {
                if let Some(stem) = stem.strip_suffix('.') {
                    return stem.to_string();
                }
            }
        }
        slug
    }
}

/// Remove `import`/`export` declaration lines, rejoin and trim
pub fn clean_body(body: &str) -> String {
    body.lines()
        .filter(|line| !is_declaration_line(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Text of the first level-1 heading, if any
///
/// Uses `parse_heading_line` on every line, exactly as the segmenter
/// does, so the title is always one of the page's heading records.
fn first_h1(body: &str) -> Option<String> {
    body.lines()
        .filter_map(parse_heading_line)
        .find(|heading| heading.level == 1)
        .map(|heading| heading.text.to_string())
}
