//! Configuration types for docsearch.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DocsError, Result};

/// Main configuration for docsearch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Index configuration.
    #[serde(default)]
    pub index: IndexConfig,

    /// Search configuration.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Path to the JSON document index.
    #[serde(default = "default_index_path")]
    pub path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: default_index_path(),
        }
    }
}

/// Search configuration.
///
/// These values belong to the caller of the ranker: the ranker applies
/// whatever bound it is handed, the engine decides what that bound is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of results when the request does not say.
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,

    /// Upper bound on requested results.
    #[serde(default = "default_max_results_limit")]
    pub max_results_limit: usize,

    /// Minimum composite score for a document to be returned.
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            max_results_limit: default_max_results_limit(),
            min_score: default_min_score(),
        }
    }
}

// Default value functions

fn default_max_results() -> usize {
    5
}

fn default_max_results_limit() -> usize {
    20
}

fn default_min_score() -> f64 {
    0.01
}

fn default_index_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docsearch")
        .join("index.json")
}

impl DocsConfig {
    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| DocsError::Config {
            message: format!("Failed to parse config {}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default paths.
    pub fn load_default() -> Result<Self> {
        // Try user config first
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("docsearch").join("config.toml");
            if user_config.exists() {
                return Self::load(&user_config);
            }
        }

        // Try local config
        let local_config = PathBuf::from("docsearch.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        Ok(Self::default())
    }

    /// Reject settings the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        if search.max_results_limit == 0 {
            return Err(DocsError::Config {
                message: "search.max_results_limit must be at least 1".to_string(),
            });
        }
        if search.default_max_results == 0 || search.default_max_results > search.max_results_limit
        {
            return Err(DocsError::Config {
                message: format!(
                    "search.default_max_results must be between 1 and {}",
                    search.max_results_limit
                ),
            });
        }
        if !search.min_score.is_finite() {
            return Err(DocsError::Config {
                message: "search.min_score must be a finite number".to_string(),
            });
        }
        Ok(())
    }
}
