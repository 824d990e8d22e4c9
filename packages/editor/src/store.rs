//! # Page Store Boundary
//!
//! The persistence layer is an external collaborator; the core only sees
//! this trait. The persisted document is exactly the canonical JSON the
//! codec produces. Retry policy, transport, and auth headers all live on
//! the other side of this boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page-level metadata living beside the tree, never inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(rename = "ogImage", default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// One persisted page. `document` is `None` for a page that has never been
/// saved with content; callers treat that as a valid initial state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedPage {
    /// Canonical JSON document, if any.
    pub document: Option<String>,
    pub meta: PageMeta,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("conflicting save for page {0}")]
    Conflict(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Boundary contract for the external page store.
pub trait PageStore {
    fn load(&self, identifier: &str) -> Result<PersistedPage, StoreError>;
    fn save(&mut self, identifier: &str, page: &PersistedPage) -> Result<(), StoreError>;
}

/// In-memory store, for tests and temporary sessions.
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    pages: HashMap<String, PersistedPage>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a page, e.g. an empty one awaiting its first save.
    pub fn put(&mut self, identifier: impl Into<String>, page: PersistedPage) {
        self.pages.insert(identifier.into(), page);
    }
}

impl PageStore for MemoryPageStore {
    fn load(&self, identifier: &str) -> Result<PersistedPage, StoreError> {
        self.pages
            .get(identifier)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(identifier.to_string()))
    }

    fn save(&mut self, identifier: &str, page: &PersistedPage) -> Result<(), StoreError> {
        self.pages.insert(identifier.to_string(), page.clone());
        Ok(())
    }
}
