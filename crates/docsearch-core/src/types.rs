//! Core domain types for docsearch.

use serde::{Deserialize, Serialize};

/// Number of results returned when the request does not set a bound.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Score a document must reach to be returned when the request does not set one.
pub const DEFAULT_MIN_SCORE: f64 = 0.01;

/// One documentation section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, unique within an index.
    pub id: String,

    /// Short display title.
    pub title: String,

    /// Grouping label, used for filtering only.
    pub category: String,

    /// Body text, already stripped of markup.
    pub content: String,

    /// Sub-headings extracted from the body, in document order.
    #[serde(default)]
    pub headings: Vec<String>,

    /// Canonical reference URL for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Document {
    /// Create a document without headings or URL.
    pub fn new(id: &str, title: &str, category: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            content: content.to_string(),
            headings: Vec::new(),
            url: None,
        }
    }

    /// Set the sub-headings.
    pub fn with_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headings = headings.into_iter().map(Into::into).collect();
        self
    }

    /// Set the reference URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Headings joined into a single scoring field.
    pub fn headings_text(&self) -> String {
        self.headings.join(" ")
    }
}

/// A ranking request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Free-text query.
    pub query: String,

    /// Only consider documents with exactly this category.
    #[serde(default)]
    pub category: Option<String>,

    /// Maximum number of results (default: 5).
    #[serde(default)]
    pub max_results: Option<usize>,

    /// Minimum relevance score (default: 0.01).
    #[serde(default)]
    pub min_score: Option<f64>,
}

impl SearchOptions {
    /// Create options for a query with all defaults.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Restrict the search to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Bound the number of results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the score threshold.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Effective result bound.
    pub fn max_results_or_default(&self) -> usize {
        self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// Effective score threshold.
    pub fn min_score_or_default(&self) -> f64 {
        self.min_score.unwrap_or(DEFAULT_MIN_SCORE)
    }
}

/// A ranked match.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// The matched document.
    pub document: &'a Document,

    /// Bounded excerpt of the document content.
    pub excerpt: String,

    /// Composite relevance score (higher is better).
    pub relevance_score: f64,

    /// Headings sharing at least one token with the query.
    pub matched_headings: Vec<String>,
}

/// Search results container.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// The original query.
    pub query: String,

    /// Total results returned.
    pub total_results: usize,

    /// Search latency in milliseconds.
    pub latency_ms: u64,

    /// Individual results, best first.
    pub results: Vec<SearchResult<'a>>,
}

impl SearchResults<'_> {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
