//! # Pagecraft Renderer
//!
//! Walks the document tree depth-first and produces a virtual DOM through
//! the component registry, in two modes:
//!
//! - **Editable**: adds drag/selection attributes, and empty canvas nodes
//!   render a visible drop target instead of collapsing (ROOT gets a taller
//!   one so an empty page is still a legible target).
//! - **Frozen**: props only; the public rendition.
//!
//! Rendering is a pure read of tree state. A node whose type no longer
//! resolves becomes a diagnostic placeholder; one stale node never blanks
//! the page.

mod builtins;
mod pipeline;
mod template;
mod vdom;

pub use pipeline::{render_document, RenderMode, RenderOptions};
pub use vdom::VNode;
