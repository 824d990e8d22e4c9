//! # Pagecraft Document
//!
//! The page-document model: a tree of typed, prop-bearing nodes stored as an
//! arena keyed by node id, plus the canonical JSON codec used for
//! persistence.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ store: persisted JSON blob                  │
//! └─────────────────────────────────────────────┘
//!                     ↓ codec
//! ┌─────────────────────────────────────────────┐
//! │ document: arena of nodes                    │
//! │  - ROOT canvas entry point                  │
//! │  - parent pointer + ordered child ids       │
//! │  - structural validation                    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations / renderer: VDOM          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Nodes never hold references to each other; every edge is an id resolved
//! through the arena. Structural change is mediated by `pagecraft-editor`,
//! which validates invariants before touching the arena primitives exposed
//! here.

mod codec;
mod document;
mod errors;
mod node;

pub use codec::{from_canonical_json, to_canonical_json};
pub use document::{Document, ROOT_ID};
pub use errors::DocumentError;
pub use node::Node;
