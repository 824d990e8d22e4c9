//! Session capability levels.
//!
//! Supplied by the external auth layer. The core only cares about one
//! question: may this session mutate the document (and therefore render in
//! editable mode)?

use serde::{Deserialize, Serialize};

/// Capability level attached to a session by the external auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Anonymous visitor. Frozen render only.
    None,
    /// Authenticated, read-only. Frozen render only.
    Viewer,
    /// May edit documents.
    Editor,
    /// May edit documents and manage pages.
    Admin,
}

impl Capability {
    /// Whether this capability may mutate documents and use editable mode.
    pub fn can_edit(&self) -> bool {
        matches!(self, Capability::Editor | Capability::Admin)
    }
}
