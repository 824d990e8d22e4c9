//! Virtual DOM node produced by the render pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Output node. BTreeMap-backed attribute/style maps keep serialized VDOM
/// deterministic, same as the document codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element.
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node.
    Text { content: String },

    /// Diagnostic placeholder for a node that failed to render (unknown
    /// type). Rendered visibly instead of crashing the page.
    Diagnostic { node_id: String, message: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn diagnostic(node_id: impl Into<String>, message: impl Into<String>) -> Self {
        VNode::Diagnostic {
            node_id: node_id.into(),
            message: message.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Attribute lookup, element nodes only.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// Children slice, empty for non-elements.
    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let node = VNode::element("div")
            .with_attr("class", "hero")
            .with_style("padding", "16px")
            .with_child(VNode::text("Hello"));

        assert_eq!(node.attr("class"), Some("hero"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0], VNode::text("Hello"));
    }

    #[test]
    fn test_serde_tagging() {
        let node = VNode::diagnostic("node-1", "Unknown component type \"LegacyWidget\"");
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"Diagnostic\""));
        let back: VNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
