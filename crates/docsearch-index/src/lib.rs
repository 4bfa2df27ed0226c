//! docsearch-index - JSON document index provider
//!
//! This crate loads a pre-built documentation index from a JSON file and
//! serves it to the ranker through [`IndexProvider`]. Building the index
//! (fetching and sectioning source documents) happens elsewhere.

mod json;

pub use json::{IndexFile, JsonIndex};

// Re-export the IndexProvider trait for convenience
pub use docsearch_core::IndexProvider;
