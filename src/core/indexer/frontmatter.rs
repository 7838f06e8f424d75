//! YAML front-matter splitting.
//!
//! A document has front-matter only when its first line is exactly
//! `---`. Absence yields empty metadata; an opening delimiter with no
//! closing one, or YAML that is not a mapping, is an error.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const DELIMITER: &str = "---";

/// Why a front-matter block could not be read
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("opening '---' has no closing delimiter")]
    Unterminated,

    #[error("expected key/value pairs, found {0}")]
    NotAMapping(&'static str),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parsed front-matter key/value pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Mapping,
}

impl Metadata {
    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Explicit page title, when present and non-blank
    ///
    /// Numeric and boolean titles are accepted and rendered as text.
    pub fn title(&self) -> Option<String> {
        match self.get("title")? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A document split into metadata and body
#[derive(Debug, Clone)]
pub struct SplitDocument<'a> {
    pub metadata: Metadata,
    pub body: &'a str,
}

/// Split `source` into front-matter metadata and body.
///
/// ```
/// use docsearch::core::indexer::frontmatter::split_front_matter;
///
/// let doc = split_front_matter("---\ntitle: CLI\n---\n# Usage\n").unwrap();
/// assert_eq!(doc.metadata.title().as_deref(), Some("CLI"));
/// assert_eq!(doc.body, "# Usage\n");
/// ```
pub fn split_front_matter(source: &str) -> Result<SplitDocument<'_>, FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(after_open) = strip_delimiter_line(source) else {
        return Ok(SplitDocument {
            metadata: Metadata::default(),
            body: source,
        });
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let raw = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Ok(SplitDocument {
                metadata: parse_metadata(raw)?,
                body,
            });
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// Return the text after an opening `---` line, if there is one
fn strip_delimiter_line(source: &str) -> Option<&str> {
    let (first, rest) = match source.find('\n') {
        Some(idx) => (&source[..idx], &source[idx + 1..]),
        None => (source, ""),
    };

    (first.trim_end() == DELIMITER).then_some(rest)
}

fn parse_metadata(raw: &str) -> Result<Metadata, FrontMatterError> {
    if raw.trim().is_empty() {
        return Ok(Metadata::default());
    }

    match serde_yaml::from_str::<Value>(raw)? {
        Value::Null => Ok(Metadata::default()),
        Value::Mapping(entries) => Ok(Metadata { entries }),
        Value::Sequence(_) => Err(FrontMatterError::NotAMapping("a sequence")),
        Value::String(_) => Err(FrontMatterError::NotAMapping("a string")),
        Value::Number(_) => Err(FrontMatterError::NotAMapping("a number")),
        Value::Bool(_) => Err(FrontMatterError::NotAMapping("a boolean")),
        Value::Tagged(_) => Err(FrontMatterError::NotAMapping("a tagged value")),
    }
}
