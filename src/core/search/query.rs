//! Query parameters at the search boundary.
//!
//! Mirrors the overlay's configuration: ten hits per page, click
//! analytics on, ranking details off.

use serde::{Deserialize, Serialize};

use crate::core::config::SearchConfig;
use crate::core::error::{DocSearchError, Result};

/// One search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Free-text query
    pub query: String,

    /// 0-based page number
    pub page: usize,

    /// Results per page
    pub hits_per_page: usize,

    /// Attach a query id for click analytics
    pub click_analytics: bool,

    /// Attach ranking details to each hit
    pub get_ranking_info: bool,
}

impl QueryParams {
    /// Query with the overlay defaults
    pub fn new(query: impl Into<String>) -> Self {
        Self::from_config(query, &SearchConfig::default())
    }

    /// Query with defaults taken from `[search]` configuration
    pub fn from_config(query: impl Into<String>, config: &SearchConfig) -> Self {
        Self {
            query: query.into(),
            page: 0,
            hits_per_page: config.hits_per_page,
            click_analytics: config.click_analytics,
            get_ranking_info: config.get_ranking_info,
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_hits_per_page(mut self, hits_per_page: usize) -> Self {
        self.hits_per_page = hits_per_page;
        self
    }

    pub fn with_ranking_info(mut self, enabled: bool) -> Self {
        self.get_ranking_info = enabled;
        self
    }

    /// Reject empty or over-long queries and out-of-range page sizes
    pub fn validate(&self, max_query_length: usize, max_hits_per_page: usize) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(DocSearchError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let length = self.query.chars().count();
        if length > max_query_length {
            return Err(DocSearchError::InvalidQuery(format!(
                "Query is {length} characters; the maximum is {max_query_length}"
            )));
        }

        if self.hits_per_page == 0 || self.hits_per_page > max_hits_per_page {
            return Err(DocSearchError::InvalidQuery(format!(
                "Hits per page must be between 1 and {max_hits_per_page}, got {}",
                self.hits_per_page
            )));
        }

        Ok(())
    }

    /// Distinct lowercase query terms, in query order
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for word in self.query.split_whitespace() {
            let word = word.to_lowercase();
            if !terms.contains(&word) {
                terms.push(word);
            }
        }
        terms
    }
}
