//! # Render Pipeline
//!
//! Depth-first traversal of the document, children in stored order,
//! dispatching each node through its registry entry.

use pagecraft_document::{Document, Node, ROOT_ID};
use pagecraft_registry::{Registry, RendererRef};
use tracing::warn;

use crate::builtins::render_builtin;
use crate::template::render_template;
use crate::VNode;

/// Render mode. Editable requires an editor/admin session; the session
/// layer enforces that before calling in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Drag/selection affordances and empty-canvas placeholders.
    Editable,
    /// Props only; the public rendition.
    Frozen,
}

/// Options for one render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Node ids to mark selected (editable mode only).
    pub selected: Vec<String>,
}

impl RenderOptions {
    pub fn frozen() -> Self {
        Self {
            mode: RenderMode::Frozen,
            selected: Vec::new(),
        }
    }

    pub fn editable() -> Self {
        Self {
            mode: RenderMode::Editable,
            selected: Vec::new(),
        }
    }

    pub fn with_selected(mut self, selected: Vec<String>) -> Self {
        self.selected = selected;
        self
    }
}

/// Render the whole document from ROOT.
pub fn render_document(document: &Document, registry: &Registry, options: &RenderOptions) -> VNode {
    render_node(document, registry, options, ROOT_ID)
        .unwrap_or_else(|| VNode::diagnostic(ROOT_ID, "Document has no ROOT node"))
}

fn render_node(
    document: &Document,
    registry: &Registry,
    options: &RenderOptions,
    node_id: &str,
) -> Option<VNode> {
    let node = match document.get(node_id) {
        Some(node) => node,
        None => {
            // Structural invariants make this unreachable for documents the
            // engine produced; recover visibly for anything else.
            return Some(VNode::diagnostic(node_id, "Node missing from document"));
        }
    };

    if node.hidden {
        return None;
    }

    let children: Vec<VNode> = node
        .children
        .iter()
        .filter_map(|child| render_node(document, registry, options, child))
        .collect();

    let children = placeholder_or(children, node, options);

    let rendered = match registry.resolve(&node.type_name) {
        Ok(definition) => match &definition.renderer {
            RendererRef::Builtin(kind) => render_builtin(*kind, node, children),
            RendererRef::Template(template) => render_template(template, &node.props, children),
        },
        Err(_) => {
            warn!(node_id, type_name = %node.type_name, "unresolved component type");
            VNode::diagnostic(
                node_id,
                format!("Unknown component type \"{}\"", node.type_name),
            )
        }
    };

    Some(apply_affordances(rendered, node, options))
}

/// In editable mode an empty canvas shows a visible drop target instead of
/// collapsing to zero height. ROOT gets a taller region than a nested
/// canvas so an empty page is still a legible first-drop target.
fn placeholder_or(children: Vec<VNode>, node: &Node, options: &RenderOptions) -> Vec<VNode> {
    if options.mode != RenderMode::Editable || !node.is_canvas() || !children.is_empty() {
        return children;
    }

    let min_height = if node.id == ROOT_ID { "500px" } else { "100px" };
    vec![VNode::element("div")
        .with_attr("class", "empty-canvas-placeholder")
        .with_style("min-height", min_height)
        .with_child(VNode::text("Drop Components Here"))]
}

/// Editable mode annotates the rendered element with drag/selection
/// attributes. Non-element output gets wrapped so the attributes have
/// somewhere to live.
fn apply_affordances(rendered: VNode, node: &Node, options: &RenderOptions) -> VNode {
    if options.mode != RenderMode::Editable {
        return rendered;
    }

    let host = match rendered {
        element @ VNode::Element { .. } => element,
        other => VNode::element("div").with_child(other),
    };

    let host = host
        .with_attr("data-node-id", node.id.clone())
        .with_attr("draggable", "true");

    if options.selected.iter().any(|id| id == &node.id) {
        host.with_attr("data-selected", "true")
    } else {
        host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_common::Props;
    use serde_json::json;

    fn doc_with_hero() -> Document {
        let mut doc = Document::empty();
        let registry = Registry::builtin();
        let mut overrides = Props::new();
        overrides.insert("title".to_string(), json!("Welcome"));
        let hero = registry
            .create_node("node-1", "HeroBanner", Some(overrides))
            .unwrap();
        doc.add_node(hero);
        doc.attach(ROOT_ID, "node-1", None);
        doc
    }

    fn find_by_node_id<'a>(vnode: &'a VNode, id: &str) -> Option<&'a VNode> {
        if vnode.attr("data-node-id") == Some(id) {
            return Some(vnode);
        }
        vnode
            .children()
            .iter()
            .find_map(|child| find_by_node_id(child, id))
    }

    #[test]
    fn test_frozen_render_has_no_affordances() {
        let doc = doc_with_hero();
        let registry = Registry::builtin();
        let vdom = render_document(&doc, &registry, &RenderOptions::frozen());

        assert!(vdom.attr("data-node-id").is_none());
        assert!(find_by_node_id(&vdom, "node-1").is_none());
    }

    #[test]
    fn test_editable_render_tags_nodes() {
        let doc = doc_with_hero();
        let registry = Registry::builtin();
        let options = RenderOptions::editable().with_selected(vec!["node-1".to_string()]);
        let vdom = render_document(&doc, &registry, &options);

        assert_eq!(vdom.attr("data-node-id"), Some(ROOT_ID));
        let hero = find_by_node_id(&vdom, "node-1").unwrap();
        assert_eq!(hero.attr("draggable"), Some("true"));
        assert_eq!(hero.attr("data-selected"), Some("true"));
    }

    #[test]
    fn test_empty_root_gets_tall_placeholder() {
        let doc = Document::empty();
        let registry = Registry::builtin();
        let vdom = render_document(&doc, &registry, &RenderOptions::editable());

        let placeholder = vdom
            .children()
            .iter()
            .find(|c| c.attr("class") == Some("empty-canvas-placeholder"))
            .unwrap();
        match placeholder {
            VNode::Element { styles, .. } => {
                assert_eq!(styles.get("min-height").map(String::as_str), Some("500px"));
            }
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn test_empty_nested_canvas_gets_short_placeholder() {
        let mut doc = Document::empty();
        let registry = Registry::builtin();
        let container = registry.create_node("node-1", "Container", None).unwrap();
        doc.add_node(container);
        doc.attach(ROOT_ID, "node-1", None);

        let vdom = render_document(&doc, &registry, &RenderOptions::editable());
        let nested = find_by_node_id(&vdom, "node-1").unwrap();
        let placeholder = nested
            .children()
            .iter()
            .find(|c| c.attr("class") == Some("empty-canvas-placeholder"))
            .unwrap();
        match placeholder {
            VNode::Element { styles, .. } => {
                assert_eq!(styles.get("min-height").map(String::as_str), Some("100px"));
            }
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn test_frozen_empty_canvas_has_no_placeholder() {
        let doc = Document::empty();
        let registry = Registry::builtin();
        let vdom = render_document(&doc, &registry, &RenderOptions::frozen());
        assert!(vdom.children().is_empty());
    }

    #[test]
    fn test_unknown_type_renders_diagnostic_among_siblings() {
        let mut doc = doc_with_hero();
        let legacy = pagecraft_document::Node::new("node-2", "LegacyWidget", Props::new());
        doc.add_node(legacy);
        doc.attach(ROOT_ID, "node-2", None);

        let registry = Registry::builtin();
        let vdom = render_document(&doc, &registry, &RenderOptions::frozen());

        let kids = vdom.children();
        assert_eq!(kids.len(), 2);
        // Sibling hero still rendered normally.
        assert!(matches!(&kids[0], VNode::Element { .. }));
        assert!(matches!(
            &kids[1],
            VNode::Diagnostic { node_id, message }
                if node_id == "node-2" && message.contains("LegacyWidget")
        ));
    }

    #[test]
    fn test_hidden_nodes_are_skipped() {
        let mut doc = doc_with_hero();
        doc.get_mut("node-1").unwrap().hidden = true;
        let registry = Registry::builtin();
        let vdom = render_document(&doc, &registry, &RenderOptions::frozen());
        assert!(vdom.children().is_empty());
    }
}
