//! JSON file backed document index.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use docsearch_core::{DocsError, Document, IndexProvider, Result};

/// On-disk shape of an index file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexFile {
    /// Documentation sections, in index order.
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// An immutable, validated set of documents.
#[derive(Debug, Clone)]
pub struct JsonIndex {
    /// File the index was loaded from, if any.
    path: Option<PathBuf>,

    /// Documents in index order.
    documents: Vec<Document>,

    /// Position of each document by id.
    positions: HashMap<String, usize>,
}

impl JsonIndex {
    /// Load and validate an index file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading document index from {:?}", path);

        let content = fs::read_to_string(path)
            .map_err(|e| DocsError::index_unavailable(path.display().to_string(), e.to_string()))?;
        let file: IndexFile = serde_json::from_str(&content)?;

        let mut index = Self::from_documents(file.documents)?;
        index.path = Some(path.to_path_buf());

        info!(
            "Loaded {} documents in {} categories",
            index.len(),
            index.categories().len()
        );
        Ok(index)
    }

    /// Build an index from documents already in memory.
    ///
    /// Fails if two documents share an id.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(documents.len());
        for (position, doc) in documents.iter().enumerate() {
            if positions.insert(doc.id.clone(), position).is_some() {
                return Err(DocsError::invalid_index(format!(
                    "duplicate document id: {}",
                    doc.id
                )));
            }
        }

        let empty = documents.iter().filter(|d| d.content.trim().is_empty()).count();
        if empty > 0 {
            debug!("{} documents have no content and will never match", empty);
        }

        Ok(Self {
            path: None,
            documents,
            positions,
        })
    }

    /// Write the index as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = IndexFile {
            documents: self.documents.clone(),
        };
        fs::write(path, serde_json::to_string_pretty(&file)?)?;

        info!("Saved {} documents to {:?}", self.len(), path);
        Ok(())
    }

    /// Look up a document by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.positions.get(id).map(|&position| &self.documents[position])
    }

    /// File the index was loaded from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl IndexProvider for JsonIndex {
    fn documents(&self) -> Result<&[Document]> {
        Ok(self.documents.as_slice())
    }

    fn categories(&self) -> Vec<String> {
        self.documents
            .iter()
            .map(|doc| doc.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_documents() -> Vec<Document> {
        vec![
            Document::new("vim-mode", "Vim Mode", "editing", "Enable vim keybindings.")
                .with_headings(["Enabling vim"])
                .with_url("https://docs.example.com/editing#vim-mode"),
            Document::new("themes", "Themes", "appearance", "Pick a theme."),
            Document::new("undo", "Undo", "editing", "Rewind edits."),
        ]
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("index.json");

        let index = JsonIndex::from_documents(sample_documents()).unwrap();
        index.save(&path).unwrap();

        let loaded = JsonIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.path(), Some(path.as_path()));
        assert_eq!(loaded.documents().unwrap(), index.documents().unwrap());
    }

    #[test]
    fn test_load_minimal_document_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        fs::write(
            &path,
            r#"{"documents":[{"id":"a","title":"A","category":"c","content":"text"}]}"#,
        )
        .unwrap();

        let index = JsonIndex::load(&path).unwrap();
        let doc = index.get("a").unwrap();
        assert!(doc.headings.is_empty());
        assert!(doc.url.is_none());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = JsonIndex::load(dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "INDEX_UNAVAILABLE");
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        fs::write(&path, "{\"documents\": [").unwrap();

        let err = JsonIndex::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut docs = sample_documents();
        docs.push(Document::new("themes", "Again", "appearance", "dup"));

        let err = JsonIndex::from_documents(docs).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INDEX");
        assert!(err.to_string().contains("themes"));
    }

    #[test]
    fn test_categories_sorted_unique() {
        let index = JsonIndex::from_documents(sample_documents()).unwrap();
        assert_eq!(index.categories(), vec!["appearance", "editing"]);
    }

    #[test]
    fn test_get_by_id() {
        let index = JsonIndex::from_documents(sample_documents()).unwrap();
        assert_eq!(index.get("undo").unwrap().title, "Undo");
        assert!(index.get("nope").is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = JsonIndex::from_documents(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.categories().is_empty());
    }
}
