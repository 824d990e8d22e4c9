//! A single node of the page tree: one visual block and its configuration.

use pagecraft_common::Props;
use serde::{Deserialize, Serialize};

/// One element of the page tree.
///
/// Edges are ids, never references: `children` and `parent` are resolved
/// through the owning [`Document`](crate::Document) arena. Only canvas nodes
/// may own children; leaves keep an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within a document. `"ROOT"` is reserved for the entry point.
    pub id: String,

    /// Type tag resolved against the component registry at render time.
    pub type_name: String,

    /// Human-readable name shown in the editor layers panel.
    pub display_name: String,

    /// The node's configuration.
    pub props: Props,

    /// Canvas nodes may own an ordered list of children.
    pub is_canvas: bool,

    /// Hidden nodes are skipped by the render pipeline.
    pub hidden: bool,

    /// Ordered child ids; render order. Always empty for leaves.
    pub children: Vec<String>,

    /// Back-reference to the containing node. `None` only for ROOT.
    pub parent: Option<String>,
}

impl Node {
    /// Build a detached leaf node. Canvas flag and defaults come from the
    /// registry; this is the raw constructor beneath it.
    pub fn new(id: impl Into<String>, type_name: impl Into<String>, props: Props) -> Self {
        let type_name = type_name.into();
        Self {
            id: id.into(),
            display_name: type_name.clone(),
            type_name,
            props,
            is_canvas: false,
            hidden: false,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn with_canvas(mut self, is_canvas: bool) -> Self {
        self.is_canvas = is_canvas;
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Whether this node may own children.
    pub fn is_canvas(&self) -> bool {
        self.is_canvas
    }
}
