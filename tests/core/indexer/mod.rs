//! Indexer layer tests
//!
//! End-to-end indexing of synthetic content trees: walk order,
//! record shape, rerun stability and failure behavior.

mod test_properties;
