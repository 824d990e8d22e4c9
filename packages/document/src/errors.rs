//! Error types for document loading and validation.

use thiserror::Error;

/// Malformed-document conditions. Deserialization aborts the entire load on
/// the first of these; no partial document is ever produced.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("malformed document: missing ROOT node")]
    MissingRoot,

    #[error("malformed document: ROOT node must be a canvas")]
    RootNotCanvas,

    #[error("malformed document: node {parent} references unknown child {child}")]
    UnknownChild { parent: String, child: String },

    #[error("malformed document: node {child} does not point back to parent {parent}")]
    InconsistentParent { parent: String, child: String },

    #[error("malformed document: non-canvas node {0} has children")]
    LeafWithChildren(String),

    #[error("malformed document: node {0} is not reachable from ROOT")]
    Unreachable(String),

    #[error("malformed document: duplicate child id {child} under {parent}")]
    DuplicateChild { parent: String, child: String },
}
