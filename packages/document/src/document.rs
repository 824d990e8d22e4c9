//! # Document Arena
//!
//! The in-memory page tree: a `BTreeMap` of nodes keyed by id, with `"ROOT"`
//! as the fixed entry point. The BTreeMap keeps key order stable so repeated
//! serializations of an unmodified document are byte-identical.
//!
//! The arena exposes low-level primitives (`add_node`, `remove_node`,
//! `attach`, `detach`). Invariant enforcement (cycle checks, root
//! immutability, canvas-vs-leaf rules) lives in `pagecraft-editor`, which
//! validates fully before calling down here.

use std::collections::BTreeMap;

use pagecraft_common::Props;
use serde_json::json;

use crate::{DocumentError, Node};

/// Reserved id of the tree's entry point. Always present, always a canvas,
/// never deletable or movable.
pub const ROOT_ID: &str = "ROOT";

/// The full page tree for one editing session.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: BTreeMap<String, Node>,

    /// Increments on each applied mutation. Not persisted.
    pub version: u64,

    /// Seed for fresh node ids. Not persisted.
    next_id: u64,
}

impl Document {
    /// A document with nothing saved yet: a lone ROOT canvas. Mirrors the
    /// editor shell dropping a default full-page container into an empty
    /// frame.
    pub fn empty() -> Self {
        let mut props = Props::new();
        props.insert("backgroundColor".to_string(), json!("#ffffff"));
        props.insert("minHeight".to_string(), json!("800px"));
        props.insert("padding".to_string(), json!("40px"));

        let root = Node::new(ROOT_ID, "Container", props)
            .with_canvas(true)
            .with_display_name("Container");

        let mut nodes = BTreeMap::new();
        nodes.insert(ROOT_ID.to_string(), root);

        Self {
            nodes,
            version: 0,
            next_id: 1,
        }
    }

    /// Rebuild a document from an already-validated node set.
    pub(crate) fn from_nodes(nodes: BTreeMap<String, Node>) -> Self {
        Self {
            nodes,
            version: 0,
            next_id: 1,
        }
    }

    /// Mint an id unused in this document.
    pub fn allocate_id(&mut self) -> String {
        loop {
            let candidate = format!("node-{}", self.next_id);
            self.next_id += 1;
            if !self.nodes.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn root(&self) -> &Node {
        // ROOT presence is a construction invariant; both constructors and
        // the codec guarantee it.
        &self.nodes[ROOT_ID]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in stable key order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Place a detached node into the arena without linking it anywhere.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Remove a node from the arena without touching its former parent.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        self.nodes.remove(id)
    }

    /// Link `child_id` under `parent_id` at `index` (clamped to the child
    /// count) and set the back-reference. Returns the effective index.
    pub fn attach(&mut self, parent_id: &str, child_id: &str, index: Option<usize>) -> usize {
        let effective = if let Some(parent) = self.nodes.get_mut(parent_id) {
            let at = index.unwrap_or(parent.children.len()).min(parent.children.len());
            parent.children.insert(at, child_id.to_string());
            at
        } else {
            0
        };
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parent = Some(parent_id.to_string());
        }
        effective
    }

    /// Unlink `child_id` from its parent, returning the (parent id, index)
    /// it occupied. The node itself stays in the arena.
    pub fn detach(&mut self, child_id: &str) -> Option<(String, usize)> {
        let parent_id = self.nodes.get(child_id)?.parent.clone()?;
        let parent = self.nodes.get_mut(&parent_id)?;
        let index = parent.children.iter().position(|c| c == child_id)?;
        parent.children.remove(index);
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parent = None;
        }
        Some((parent_id, index))
    }

    /// Ids of `node_id` and every descendant, depth-first in stored order.
    pub fn subtree_ids(&self, node_id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![node_id.to_string()];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(&id) {
                // Reverse so stored order comes off the stack first.
                for child in node.children.iter().rev() {
                    stack.push(child.clone());
                }
                out.push(id);
            }
        }
        out
    }

    /// Whether `node_id` is `ancestor_id` or sits anywhere below it.
    pub fn is_within(&self, node_id: &str, ancestor_id: &str) -> bool {
        let mut current = Some(node_id.to_string());
        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent.clone());
        }
        false
    }

    /// Check the structural invariants: ROOT present and canvas, edges
    /// bidirectionally consistent, leaves childless, every node reachable
    /// from ROOT exactly once.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let root = self.nodes.get(ROOT_ID).ok_or(DocumentError::MissingRoot)?;
        if !root.is_canvas() {
            return Err(DocumentError::RootNotCanvas);
        }

        let mut seen = std::collections::BTreeSet::new();
        let mut stack = vec![ROOT_ID.to_string()];
        while let Some(id) = stack.pop() {
            let node = match self.nodes.get(&id) {
                Some(node) => node,
                None => continue,
            };
            seen.insert(id.clone());

            if !node.is_canvas() && !node.children.is_empty() {
                return Err(DocumentError::LeafWithChildren(id));
            }

            for child_id in &node.children {
                let child = self
                    .nodes
                    .get(child_id)
                    .ok_or_else(|| DocumentError::UnknownChild {
                        parent: id.clone(),
                        child: child_id.clone(),
                    })?;
                if child.parent.as_deref() != Some(id.as_str()) {
                    return Err(DocumentError::InconsistentParent {
                        parent: id.clone(),
                        child: child_id.clone(),
                    });
                }
                if !seen.insert(child_id.clone()) {
                    return Err(DocumentError::DuplicateChild {
                        parent: id.clone(),
                        child: child_id.clone(),
                    });
                }
                stack.push(child_id.clone());
            }
        }

        for id in self.nodes.keys() {
            if !seen.contains(id) {
                return Err(DocumentError::Unreachable(id.clone()));
            }
        }

        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Structural equality: same nodes, same edges, same props. The version
/// counter and id seed are session state, not document content.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, parent: &str) -> Node {
        let mut node = Node::new(id, "TextBlock", Props::new());
        node.parent = Some(parent.to_string());
        node
    }

    #[test]
    fn test_empty_document_has_root_canvas() {
        let doc = Document::empty();
        assert_eq!(doc.len(), 1);
        assert!(doc.root().is_canvas());
        assert_eq!(doc.root().id, ROOT_ID);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_allocate_id_skips_existing() {
        let mut doc = Document::empty();
        let first = doc.allocate_id();
        assert_eq!(first, "node-1");

        doc.add_node(leaf("node-2", ROOT_ID));
        // node-2 is taken, allocation steps past it.
        assert_eq!(doc.allocate_id(), "node-3");
    }

    #[test]
    fn test_attach_detach_round_trip() {
        let mut doc = Document::empty();
        doc.add_node(Node::new("node-1", "TextBlock", Props::new()));

        let index = doc.attach(ROOT_ID, "node-1", None);
        assert_eq!(index, 0);
        assert_eq!(doc.root().children, vec!["node-1"]);
        assert_eq!(doc.get("node-1").unwrap().parent.as_deref(), Some(ROOT_ID));
        assert!(doc.validate().is_ok());

        let (parent, index) = doc.detach("node-1").unwrap();
        assert_eq!(parent, ROOT_ID);
        assert_eq!(index, 0);
        assert!(doc.root().children.is_empty());
    }

    #[test]
    fn test_attach_clamps_index() {
        let mut doc = Document::empty();
        doc.add_node(Node::new("node-1", "TextBlock", Props::new()));
        let index = doc.attach(ROOT_ID, "node-1", Some(99));
        assert_eq!(index, 0);
    }

    #[test]
    fn test_subtree_ids_depth_first() {
        let mut doc = Document::empty();
        let mut container = Node::new("node-1", "Container", Props::new()).with_canvas(true);
        container.parent = Some(ROOT_ID.to_string());
        container.children = vec!["node-2".to_string(), "node-3".to_string()];
        doc.add_node(container);
        doc.add_node(leaf("node-2", "node-1"));
        doc.add_node(leaf("node-3", "node-1"));
        doc.get_mut(ROOT_ID).unwrap().children.push("node-1".to_string());

        assert_eq!(doc.subtree_ids("node-1"), vec!["node-1", "node-2", "node-3"]);
        assert!(doc.is_within("node-3", "node-1"));
        assert!(doc.is_within("node-3", ROOT_ID));
        assert!(!doc.is_within("node-1", "node-3"));
    }

    #[test]
    fn test_validate_rejects_inconsistent_parent() {
        let mut doc = Document::empty();
        let mut stray = Node::new("node-1", "TextBlock", Props::new());
        stray.parent = Some("somewhere-else".to_string());
        doc.add_node(stray);
        doc.get_mut(ROOT_ID).unwrap().children.push("node-1".to_string());

        assert!(matches!(
            doc.validate(),
            Err(DocumentError::InconsistentParent { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_leaf_with_children() {
        let mut doc = Document::empty();
        let mut bad_leaf = leaf("node-1", ROOT_ID);
        bad_leaf.children.push("node-2".to_string());
        doc.add_node(bad_leaf);
        doc.add_node(leaf("node-2", "node-1"));
        doc.get_mut(ROOT_ID).unwrap().children.push("node-1".to_string());

        assert!(matches!(
            doc.validate(),
            Err(DocumentError::LeafWithChildren(id)) if id == "node-1"
        ));
    }

    #[test]
    fn test_validate_rejects_orphans() {
        let mut doc = Document::empty();
        doc.add_node(leaf("node-1", ROOT_ID));
        // Never attached to ROOT's child list.
        assert!(matches!(
            doc.validate(),
            Err(DocumentError::Unreachable(id)) if id == "node-1"
        ));
    }
}
