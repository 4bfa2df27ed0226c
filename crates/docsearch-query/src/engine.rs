//! Query engine over an index provider.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use docsearch_core::{DocsError, IndexProvider, Result, SearchConfig, SearchOptions, SearchResults};

use crate::ranker::search;

/// Search front end for an [`IndexProvider`].
///
/// The ranker applies whatever bounds it is given; the engine is the caller
/// that fills in configured defaults and clamps `max_results`.
pub struct QueryEngine<I> {
    /// Document source.
    index: Arc<I>,

    /// Defaults and limits applied to every request.
    config: SearchConfig,
}

impl<I> QueryEngine<I>
where
    I: IndexProvider,
{
    /// Create a new query engine with default search settings.
    pub fn new(index: Arc<I>) -> Self {
        Self::with_config(index, SearchConfig::default())
    }

    /// Create a new query engine with explicit search settings.
    pub fn with_config(index: Arc<I>, config: SearchConfig) -> Self {
        Self { index, config }
    }

    /// Search settings in effect.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank the indexed documents against a request.
    ///
    /// An index failure is an error; a query that matches nothing is an
    /// empty `SearchResults`.
    pub fn search(&self, options: SearchOptions) -> Result<SearchResults<'_>> {
        let start = Instant::now();
        let options = self.resolve(options)?;

        info!("Searching for: {:?}", options.query);

        let documents = self.index.documents()?;
        debug!(
            "Ranking {} documents (category: {:?}, max_results: {:?}, min_score: {:?})",
            documents.len(),
            options.category,
            options.max_results,
            options.min_score
        );

        let results = search(documents, &options);
        let latency_ms = start.elapsed().as_millis() as u64;

        info!(
            "Search completed in {}ms, returned {} results",
            latency_ms,
            results.len()
        );

        Ok(SearchResults {
            query: options.query,
            total_results: results.len(),
            latency_ms,
            results,
        })
    }

    /// Category labels known to the index.
    pub fn categories(&self) -> Vec<String> {
        self.index.categories()
    }

    /// Apply configured defaults and limits to a request.
    fn resolve(&self, mut options: SearchOptions) -> Result<SearchOptions> {
        let max_results = options
            .max_results
            .unwrap_or(self.config.default_max_results)
            .clamp(1, self.config.max_results_limit.max(1));
        options.max_results = Some(max_results);

        let min_score = options.min_score.unwrap_or(self.config.min_score);
        if !min_score.is_finite() {
            return Err(DocsError::invalid_argument(format!(
                "min_score must be a finite number, got {}",
                min_score
            )));
        }
        options.min_score = Some(min_score);

        Ok(options)
    }
}
