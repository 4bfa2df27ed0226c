//! Interfaces between the ranker and its collaborators.

use crate::error::Result;
use crate::types::Document;

/// Supplies the document collection the ranker searches.
///
/// Implementations validate documents when they are loaded; the ranker does
/// not re-check their shape.
pub trait IndexProvider: Send + Sync {
    /// All documents, in index order.
    fn documents(&self) -> Result<&[Document]>;

    /// Known category labels, sorted and deduplicated.
    fn categories(&self) -> Vec<String>;
}
