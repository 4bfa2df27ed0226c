//! TF-IDF field scoring and the weighted composite score.
//!
//! Every field is scored against the same body-derived document frequency
//! table. Titles and headings do not get idf tables of their own.

use std::collections::{HashMap, HashSet};

use docsearch_core::Document;

use crate::frequency::{document_frequencies, term_counts};
use crate::tokenize::tokenize;

/// Weight of the body field score.
pub const BODY_WEIGHT: f64 = 1.0;

/// Weight of the title field score.
pub const TITLE_WEIGHT: f64 = 3.0;

/// Weight of the joined-headings field score.
pub const HEADINGS_WEIGHT: f64 = 2.0;

/// Query-term counts for one field of one document.
#[derive(Debug, Clone, Default)]
pub struct FieldStats {
    /// Occurrences of each query term.
    pub counts: HashMap<String, usize>,

    /// Total tokens in the field, query terms or not.
    pub total_tokens: usize,
}

impl FieldStats {
    /// Build stats from an already tokenized field.
    pub fn from_tokens(tokens: &[String], relevant: &HashSet<&str>) -> Self {
        Self {
            counts: term_counts(tokens, relevant),
            total_tokens: tokens.len(),
        }
    }

    /// Fraction of the field's tokens equal to `term`.
    fn term_frequency(&self, term: &str) -> f64 {
        let count = self.counts.get(term).copied().unwrap_or(0);
        count as f64 / self.total_tokens.max(1) as f64
    }
}

/// Per-field stats for one document.
#[derive(Debug, Clone)]
pub struct DocumentStats {
    /// Body tokens, kept for excerpt extraction.
    pub body_tokens: Vec<String>,
    pub body: FieldStats,
    pub title: FieldStats,
    pub headings: FieldStats,
}

impl DocumentStats {
    /// Tokenize and count the body, title and headings of a document.
    pub fn new(document: &Document, relevant: &HashSet<&str>) -> Self {
        let body_tokens = tokenize(&document.content);
        let body = FieldStats::from_tokens(&body_tokens, relevant);
        let title = FieldStats::from_tokens(&tokenize(&document.title), relevant);
        let headings = FieldStats::from_tokens(&tokenize(&document.headings_text()), relevant);

        Self {
            body_tokens,
            body,
            title,
            headings,
        }
    }
}

/// Corpus-wide statistics over the filtered document set.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    /// Documents whose body contains each query term.
    pub document_frequencies: HashMap<String, usize>,

    /// Documents in the filtered set.
    pub total_documents: usize,
}

impl CorpusStats {
    /// Build the body document frequency table for `terms`.
    pub fn from_bodies<'a, I>(terms: &[String], bodies: I) -> Self
    where
        I: IntoIterator<Item = &'a FieldStats>,
    {
        let mut total_documents = 0;
        let document_frequencies = document_frequencies(
            terms,
            bodies.into_iter().map(|body| {
                total_documents += 1;
                &body.counts
            }),
        );

        Self {
            document_frequencies,
            total_documents,
        }
    }

    /// Smoothed inverse document frequency: `ln(N / (df + 1))`.
    ///
    /// Negative for terms found in most documents; not clamped.
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.document_frequencies.get(term).copied().unwrap_or(0);
        (self.total_documents as f64 / (df + 1) as f64).ln()
    }

    /// TF-IDF score of one field for the distinct query terms.
    pub fn field_score(&self, terms: &[String], field: &FieldStats) -> f64 {
        if self.total_documents == 0 || field.total_tokens == 0 {
            return 0.0;
        }

        let mut score = 0.0;
        for term in terms {
            let tf = field.term_frequency(term);
            if tf == 0.0 {
                continue;
            }
            score += tf * self.idf(term);
        }
        score
    }

    /// Weighted sum of the body, title and headings scores.
    pub fn composite_score(&self, terms: &[String], stats: &DocumentStats) -> f64 {
        BODY_WEIGHT * self.field_score(terms, &stats.body)
            + TITLE_WEIGHT * self.field_score(terms, &stats.title)
            + HEADINGS_WEIGHT * self.field_score(terms, &stats.headings)
    }
}
