//! Local search over an exported record file.
//!
//! `RecordIndex` stands in for the hosted service when previewing a
//! build: every query term must occur (case-insensitively) in a
//! record's title, description or slug. Hits keep `objectID` order;
//! relevance ranking is left to the hosted service.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::core::config::SearchConfig;
use crate::core::error::{DocSearchError, Result};
use crate::core::indexer::assembler::read_records;
use crate::core::search::QueryParams;
use crate::core::types::SearchRecord;

const HIGHLIGHT_PRE: &str = "<em>";
const HIGHLIGHT_POST: &str = "</em>";

/// The query boundary: anything that turns a query into ranked hits
pub trait SearchClient {
    fn search(&self, params: &QueryParams) -> Result<SearchResults>;
}

/// How many query terms a field matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    None,
    Partial,
    Full,
}

/// Highlighted rendering of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightResult {
    /// Field value with matches wrapped in `<em>`
    pub value: String,
    pub match_level: MatchLevel,
    pub matched_words: Vec<String>,
}

/// Highlights for the displayed fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlights {
    pub title: HighlightResult,
    pub description: HighlightResult,
}

/// Per-hit ranking details, attached on request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingInfo {
    /// Query terms matched
    pub words: usize,
    /// Query terms found in the title
    pub title_words: usize,
}

/// One result: the record plus highlighting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    #[serde(flatten)]
    pub record: SearchRecord,

    #[serde(rename = "_highlightResult")]
    pub highlight: Highlights,

    #[serde(rename = "_rankingInfo", skip_serializing_if = "Option::is_none")]
    pub ranking_info: Option<RankingInfo>,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<Hit>,
    pub nb_hits: usize,
    pub page: usize,
    pub nb_pages: usize,
    pub hits_per_page: usize,

    #[serde(rename = "queryID", skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
}

/// In-memory index over exported records
#[derive(Debug, Clone)]
pub struct RecordIndex {
    records: Vec<SearchRecord>,
    limits: SearchConfig,
}

impl RecordIndex {
    /// Index records with default query limits
    pub fn from_records(records: Vec<SearchRecord>) -> Self {
        Self::with_config(records, SearchConfig::default())
    }

    /// Index records with limits from `[search]` configuration
    pub fn with_config(records: Vec<SearchRecord>, limits: SearchConfig) -> Self {
        Self { records, limits }
    }

    /// Load an exported record file
    pub fn load(path: &Path, limits: SearchConfig) -> Result<Self> {
        let records = read_records(path)?;
        tracing::debug!("Loaded {} records from {:?}", records.len(), path);
        Ok(Self::with_config(records, limits))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn hit_for(&self, record: &SearchRecord, matchers: &[TermMatcher], ranking: bool) -> Option<Hit> {
        let all_present = matchers.iter().all(|m| {
            m.pattern.is_match(&record.title)
                || m.pattern.is_match(&record.description)
                || m.pattern.is_match(&record.slug)
        });
        if !all_present {
            return None;
        }

        let title = highlight(&record.title, matchers);
        let description = highlight(&record.description, matchers);
        let ranking_info = ranking.then(|| RankingInfo {
            words: matchers.len(),
            title_words: title.matched_words.len(),
        });

        Some(Hit {
            record: record.clone(),
            highlight: Highlights { title, description },
            ranking_info,
        })
    }
}

impl SearchClient for RecordIndex {
    fn search(&self, params: &QueryParams) -> Result<SearchResults> {
        params.validate(self.limits.max_query_length, self.limits.max_hits_per_page)?;

        let matchers = params
            .terms()
            .into_iter()
            .map(TermMatcher::new)
            .collect::<Result<Vec<_>>>()?;

        let matched: Vec<Hit> = self
            .records
            .iter()
            .filter_map(|record| self.hit_for(record, &matchers, params.get_ranking_info))
            .collect();

        let nb_hits = matched.len();
        let nb_pages = nb_hits.div_ceil(params.hits_per_page);
        let hits = matched
            .into_iter()
            .skip(params.page.saturating_mul(params.hits_per_page))
            .take(params.hits_per_page)
            .collect();

        Ok(SearchResults {
            query: params.query.clone(),
            hits,
            nb_hits,
            page: params.page,
            nb_pages,
            hits_per_page: params.hits_per_page,
            query_id: params.click_analytics.then(|| query_id(params)),
        })
    }
}

/// Case-insensitive literal matcher for one query term
#[derive(Debug)]
struct TermMatcher {
    term: String,
    pattern: Regex,
}

impl TermMatcher {
    fn new(term: String) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(&term))
            .case_insensitive(true)
            .build()
            .map_err(|e| DocSearchError::InvalidQuery(format!("Unusable term '{term}': {e}")))?;
        Ok(Self { term, pattern })
    }
}

/// Wrap every match of any term in `<em>`, merging overlaps
fn highlight(value: &str, matchers: &[TermMatcher]) -> HighlightResult {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut matched_words = Vec::new();

    for matcher in matchers {
        let before = ranges.len();
        ranges.extend(matcher.pattern.find_iter(value).map(|m| (m.start(), m.end())));
        if ranges.len() > before {
            matched_words.push(matcher.term.clone());
        }
    }

    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut highlighted = String::with_capacity(value.len() + merged.len() * 9);
    let mut cursor = 0;
    for (start, end) in merged {
        highlighted.push_str(&value[cursor..start]);
        highlighted.push_str(HIGHLIGHT_PRE);
        highlighted.push_str(&value[start..end]);
        highlighted.push_str(HIGHLIGHT_POST);
        cursor = end;
    }
    highlighted.push_str(&value[cursor..]);

    let match_level = match matched_words.len() {
        0 => MatchLevel::None,
        n if n == matchers.len() => MatchLevel::Full,
        _ => MatchLevel::Partial,
    };

    HighlightResult {
        value: highlighted,
        match_level,
        matched_words,
    }
}

/// Identifier for a query, used to correlate clicks
///
/// Repeatable within one build of the binary only: `DefaultHasher`
/// output may change between Rust releases, so ids are not persisted.
fn query_id(params: &QueryParams) -> String {
    let mut hasher = DefaultHasher::new();
    params.query.hash(&mut hasher);
    params.page.hash(&mut hasher);
    params.hits_per_page.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
