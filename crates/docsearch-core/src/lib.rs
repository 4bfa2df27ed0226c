//! docsearch-core - Core types and traits for documentation search
//!
//! This crate provides the domain types, the index provider trait, error
//! handling and configuration shared by the rest of the docsearch workspace.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{DocsError, Result};
pub use traits::*;
pub use types::*;
