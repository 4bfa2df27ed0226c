//! docsearch-query - Relevance ranking for documentation sections
//!
//! This crate ranks documentation sections against a free-text query with a
//! weighted TF-IDF score over three fields:
//!
//! - body text (weight 1)
//! - title (weight 3)
//! - joined headings (weight 2)
//!
//! All fields share one inverse document frequency table built from body
//! text over the (optionally category-filtered) document set. Results carry
//! a large excerpt anchored on the first query-term occurrence and the
//! headings that mention a query term.
//!
//! [`search`] is a pure function over a document slice; [`QueryEngine`]
//! wraps it for an [`IndexProvider`](docsearch_core::IndexProvider) and
//! applies configured defaults and limits.
//!
//! # Example
//!
//! ```rust
//! use docsearch_core::{Document, SearchOptions};
//! use docsearch_query::search;
//!
//! let docs = vec![
//!     Document::new("vim", "Vim Mode", "editing", "Enable vim keybindings."),
//!     Document::new("themes", "Themes", "appearance", "Pick a color theme."),
//! ];
//! let results = search(&docs, &SearchOptions::new("vim mode"));
//! assert_eq!(results[0].document.id, "vim");
//! ```

mod engine;
mod excerpt;
mod frequency;
mod headings;
mod ranker;
mod scoring;
mod tokenize;

pub use engine::QueryEngine;
pub use excerpt::{extract_excerpt, MAX_EXCERPT_CHARS, WINDOW_WORDS};
pub use frequency::{document_frequencies, term_counts};
pub use headings::matched_headings;
pub use ranker::search;
pub use scoring::{
    CorpusStats, DocumentStats, FieldStats, BODY_WEIGHT, HEADINGS_WEIGHT, TITLE_WEIGHT,
};
pub use tokenize::{tokenize, unique_terms};

// Re-export for convenience
pub use docsearch_core::{Document, SearchOptions, SearchResult, SearchResults};
