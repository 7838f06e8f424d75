//! Plain-text helpers shared by the document parser and the heading
//! segmenter.

use once_cell::sync::Lazy;
use regex::Regex;

// `[text](target)` with non-empty text and target
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

const DECLARATION_KEYWORDS: [&str; 2] = ["import", "export"];

/// Text up to and including the first `.`, `!` or `?`, trimmed.
///
/// Returns an empty string when the text has no terminator.
///
/// ```
/// use docsearch::core::indexer::text::first_sentence;
///
/// assert_eq!(
///     first_sentence("This is the first sentence. This is the second."),
///     "This is the first sentence."
/// );
/// assert_eq!(first_sentence("no terminator here"), "");
/// ```
pub fn first_sentence(text: &str) -> String {
    match text.find(SENTENCE_TERMINATORS) {
        Some(end) => text[..=end].trim().to_string(),
        None => String::new(),
    }
}

/// Replace every `[text](link)` with just `text`.
///
/// ```
/// use docsearch::core::indexer::text::resolve_links;
///
/// assert_eq!(
///     resolve_links("See [the guide](/docs/guide) for details."),
///     "See the guide for details."
/// );
/// ```
pub fn resolve_links(text: &str) -> String {
    LINK_PATTERN.replace_all(text, "$1").into_owned()
}

/// Normalize heading text into a URL fragment.
///
/// Lowercases, turns each whitespace run into a single `-`, then drops
/// every character outside `[a-z0-9-]`.
pub fn heading_fragment(heading: &str) -> String {
    let mut fragment = String::with_capacity(heading.len());
    let mut in_whitespace = false;

    for ch in heading.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                fragment.push('-');
            }
            in_whitespace = true;
            continue;
        }

        in_whitespace = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            fragment.push(ch);
        }
    }

    fragment
}

/// Whether a line is an `import`/`export` declaration embedded in
/// MDX content.
///
/// The keyword must stand alone: `export const x` matches, `exported
/// values` does not.
pub fn is_declaration_line(line: &str) -> bool {
    let trimmed = line.trim();
    DECLARATION_KEYWORDS.iter().any(|keyword| {
        trimmed.strip_prefix(keyword).is_some_and(|rest| {
            rest.chars()
                .next()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_' || c == '$'))
        })
    })
}
