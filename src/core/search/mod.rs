//! Search boundary.
//!
//! Typed query parameters plus a local client over an exported record
//! file, for previewing a build without the hosted service.

mod local;
mod query;

pub use local::{
    Highlights, HighlightResult, Hit, MatchLevel, RankingInfo, RecordIndex, SearchClient,
    SearchResults,
};
pub use query::QueryParams;
