//! Error types for the editor.

use pagecraft_common::Capability;
use pagecraft_document::DocumentError;
use pagecraft_registry::RegistryError;
use thiserror::Error;

use crate::store::StoreError;

/// Structural-invariant violations. Each is rejected before any mutation is
/// applied, so a failed edit leaves the tree exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("unknown component type: {0}")]
    UnknownType(String),

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("parent {0} is not a canvas node")]
    InvalidParent(String),

    #[error("moving {node_id} under {new_parent_id} would create a cycle")]
    Cycle {
        node_id: String,
        new_parent_id: String,
    },

    #[error("the ROOT node cannot be moved or deleted")]
    RootImmutable,

    #[error("node {0} is not deletable")]
    NotDeletable(String),

    #[error("node id {0} already exists in the document")]
    DuplicateId(String),
}

/// Top-level editor error.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("edit rejected: {0}")]
    Edit(#[from] EditError),

    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("capability {0:?} cannot edit")]
    Forbidden(Capability),

    #[error("a save is already in flight for this session")]
    SaveInFlight,
}
