//! The ranking pipeline.
//!
//! `search` is a pure function of its inputs: all statistics are built per
//! call over the category-filtered set and dropped when it returns.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, trace};

use docsearch_core::{Document, SearchOptions, SearchResult};

use crate::excerpt::extract_excerpt;
use crate::headings::matched_headings;
use crate::scoring::{CorpusStats, DocumentStats};
use crate::tokenize::{tokenize, unique_terms};

/// Rank `documents` against `options.query`.
///
/// Returns at most `options.max_results` results scoring at least
/// `options.min_score`, best first. Documents with equal scores keep their
/// input order. A query with no usable tokens, or a category filter that
/// matches nothing, yields an empty list.
pub fn search<'a>(documents: &'a [Document], options: &SearchOptions) -> Vec<SearchResult<'a>> {
    let query_tokens = tokenize(&options.query);
    if query_tokens.is_empty() {
        debug!("Query {:?} has no searchable tokens", options.query);
        return Vec::new();
    }

    let query_terms = unique_terms(&query_tokens);
    let relevant: HashSet<&str> = query_terms.iter().map(String::as_str).collect();

    let filtered: Vec<&Document> = documents
        .iter()
        .filter(|doc| {
            options
                .category
                .as_deref()
                .map_or(true, |category| doc.category == category)
        })
        .collect();

    if filtered.is_empty() {
        debug!("No documents in category {:?}", options.category);
        return Vec::new();
    }

    let stats: Vec<DocumentStats> = filtered
        .iter()
        .map(|doc| DocumentStats::new(doc, &relevant))
        .collect();

    // idf is always relative to the filtered set.
    let corpus = CorpusStats::from_bodies(&query_terms, stats.iter().map(|s| &s.body));

    let min_score = options.min_score_or_default();
    let mut results = Vec::new();

    for (document, doc_stats) in filtered.into_iter().zip(&stats) {
        let score = corpus.composite_score(&query_terms, doc_stats);
        if score < min_score {
            trace!("Dropping {} with score {:.4}", document.id, score);
            continue;
        }

        results.push(SearchResult {
            document,
            excerpt: extract_excerpt(
                &document.content,
                &query_tokens,
                Some(&doc_stats.body_tokens),
            ),
            relevance_score: score,
            matched_headings: matched_headings(&document.headings, &relevant),
        });
    }

    debug!(
        "{} of {} documents cleared min score {}",
        results.len(),
        corpus.total_documents,
        min_score
    );

    // sort_by is stable, so ties keep filtered input order.
    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(options.max_results_or_default());

    results
}
