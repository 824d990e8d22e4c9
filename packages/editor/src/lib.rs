//! # Pagecraft Editor
//!
//! The document editing engine: validated structural mutations, a linear
//! undo history, the edit session that owns one open document, and the
//! assistant bridge.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ store: persisted JSON ↔ PageStore boundary  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - capability-gated mutations               │
//! │  - validate fully before applying           │
//! │  - one undo entry per operation             │
//! │  - assistant bridge (insert/define)         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: document → VDOM                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The tree is never left half-mutated**: every mutation validates its
//!    structural preconditions before touching the arena.
//! 2. **Exactly one undo entry per public operation**, LIFO, no branching.
//! 3. **Rendering is a pure read**; it can run any number of times between
//!    edits.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{EditSession, MemoryPageStore};
//! use pagecraft_common::Capability;
//! use pagecraft_registry::Registry;
//!
//! let mut session = EditSession::new("session-1", Capability::Editor, Registry::builtin());
//! let hero = session.insert("ROOT", "HeroBanner", None, None)?;
//! session.set_props(&hero, patch)?;
//! session.undo()?;
//! session.save_to(&mut store, "landing-page")?;
//! ```

mod assistant;
mod errors;
mod mutations;
mod session;
mod store;
mod undo_stack;

pub use assistant::{
    apply_operation, AppliedOperation, AssistantError, AssistantOperation, ComponentPayload,
    RenderSpec,
};
pub use errors::{EditError, EditorError};
pub use mutations::Mutation;
pub use session::EditSession;
pub use store::{MemoryPageStore, PageMeta, PageStore, PersistedPage, StoreError};
pub use undo_stack::UndoStack;

// Re-export common types for convenience
pub use pagecraft_common::Capability;
pub use pagecraft_document::{Document, ROOT_ID};
pub use pagecraft_registry::Registry;
pub use pagecraft_renderer::{RenderMode, RenderOptions, VNode};
