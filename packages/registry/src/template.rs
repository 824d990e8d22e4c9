//! Declarative render templates.
//!
//! Assistant-defined components arrive as data, not code: a small tree of
//! elements and text with `{prop}` placeholders. The render pipeline
//! interpolates the node's props into the template at render time, so a
//! generated component behaves like a parameterized section without the
//! core ever executing foreign code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of a declarative render template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderTemplate {
    /// An element with literal attributes/styles (values may contain
    /// `{prop}` placeholders) and child templates.
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        styles: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<RenderTemplate>,
    },

    /// Text content; `{prop}` placeholders resolve against the current
    /// scope (node props, or the current item inside `Each`).
    Text { value: String },

    /// Repeat `body` for each element of an array prop. Object items
    /// become the placeholder scope for the body.
    Each {
        prop: String,
        body: Box<RenderTemplate>,
    },

    /// Insertion point for the node's rendered children. Marks the
    /// component as canvas-capable when present.
    Children,
}

impl RenderTemplate {
    pub fn element(tag: impl Into<String>) -> Self {
        RenderTemplate::Element {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        RenderTemplate::Text {
            value: value.into(),
        }
    }

    pub fn with_child(mut self, child: RenderTemplate) -> Self {
        if let RenderTemplate::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderTemplate::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderTemplate::Element { ref mut attrs, .. } = self {
            attrs.insert(key.into(), value.into());
        }
        self
    }

    /// Whether any part of the template places rendered children.
    pub fn has_children_slot(&self) -> bool {
        match self {
            RenderTemplate::Children => true,
            RenderTemplate::Element { children, .. } => {
                children.iter().any(RenderTemplate::has_children_slot)
            }
            RenderTemplate::Each { body, .. } => body.has_children_slot(),
            RenderTemplate::Text { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_is_tagged() {
        let template = RenderTemplate::element("section")
            .with_style("padding", "32px")
            .with_child(RenderTemplate::text("{title}"));

        let json = serde_json::to_string(&template).unwrap();
        let back: RenderTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(template, back);
        assert!(json.contains("\"kind\":\"element\""));
    }

    #[test]
    fn test_children_slot_detection() {
        let leaf = RenderTemplate::element("div").with_child(RenderTemplate::text("{title}"));
        assert!(!leaf.has_children_slot());

        let canvas = RenderTemplate::element("div").with_child(RenderTemplate::Children);
        assert!(canvas.has_children_slot());
    }
}
