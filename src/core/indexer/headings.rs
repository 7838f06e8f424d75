//! Heading segmentation.
//!
//! Scans a cleaned body line by line, tracking the current heading and
//! the block accumulated beneath it. A record is flushed whenever the
//! next heading starts and once more at end of input. Every line that
//! parses as a heading starts a new block, code fences included.

use std::collections::HashSet;

use crate::core::indexer::text::{first_sentence, heading_fragment, resolve_links};
use crate::core::types::RecordDraft;

/// Deepest heading level recognized
pub const MAX_HEADING_LEVEL: usize = 6;

/// A heading line split into level and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` markers, 1 to 6
    pub level: u8,

    /// Heading text, trimmed
    pub text: &'a str,
}

/// Recognize `#`..`######` followed by whitespace and non-empty text.
///
/// ```
/// use docsearch::core::indexer::headings::parse_heading_line;
///
/// let heading = parse_heading_line("### Configure the IDE").unwrap();
/// assert_eq!(heading.level, 3);
/// assert_eq!(heading.text, "Configure the IDE");
///
/// assert!(parse_heading_line("#hashtag").is_none());
/// assert!(parse_heading_line("####### seven").is_none());
/// ```
pub fn parse_heading_line(line: &str) -> Option<Heading<'_>> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    // '#' is one byte, so `level` is also a byte offset
    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some(Heading {
        level: level as u8,
        text,
    })
}

/// Produces one record per heading of a page
#[derive(Debug, Clone)]
pub struct HeadingSegmenter {
    tag: String,
    url_prefix: String,
}

impl HeadingSegmenter {
    pub fn new(tag: String, url_prefix: String) -> Self {
        Self { tag, url_prefix }
    }

    /// Segment `body` into heading records under `page_slug`
    ///
    /// Records come back in document order. Headings that normalize to
    /// the same fragment all produce records.
    pub fn segment(&self, body: &str, page_slug: &str) -> Vec<RecordDraft> {
        let mut records = Vec::new();
        let mut seen = HashSet::new();

        let mut current: Option<&str> = None;
        let mut block: Vec<&str> = Vec::new();

        for line in body.lines() {
            if let Some(heading) = parse_heading_line(line) {
                if let Some(title) = current.take() {
                    records.push(self.flush(title, &block, page_slug, &mut seen));
                }
                block.clear();
                current = Some(heading.text);
                continue;
            }

            block.push(line);
        }

        if let Some(title) = current {
            records.push(self.flush(title, &block, page_slug, &mut seen));
        }

        records
    }

    fn flush(
        &self,
        title: &str,
        block: &[&str],
        page_slug: &str,
        seen: &mut HashSet<String>,
    ) -> RecordDraft {
        let slug = format!("{page_slug}#{}", heading_fragment(title));
        if !seen.insert(slug.clone()) {
            tracing::warn!("Duplicate heading anchor {} (title {:?})", slug, title);
        }

        RecordDraft {
            title: title.to_string(),
            description: block_description(block),
            tag: self.tag.clone(),
            url: format!("{}{}", self.url_prefix, slug),
            slug,
        }
    }
}

/// First non-empty line of the block, else its first sentence
fn block_description(block: &[&str]) -> String {
    let first_line = block
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty());

    match first_line {
        Some(line) => resolve_links(line),
        None => resolve_links(&first_sentence(&block.join("\n"))),
    }
}
