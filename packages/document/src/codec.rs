//! # Canonical JSON Codec
//!
//! Encodes a [`Document`] as the persisted wire form: a single JSON object
//! keyed by node id, with the fixed key `"ROOT"` naming the entry point.
//! Each entry carries the type tag (wrapped in `{"resolvedName": ...}`),
//! canvas flag, props, display metadata, ordered child ids, and parent
//! back-reference:
//!
//! ```json
//! {
//!   "ROOT": {
//!     "type": { "resolvedName": "Container" },
//!     "isCanvas": true,
//!     "props": { "padding": "40px" },
//!     "displayName": "Container",
//!     "hidden": false,
//!     "nodes": ["node-1"]
//!   },
//!   "node-1": {
//!     "type": { "resolvedName": "HeroBanner" },
//!     "isCanvas": false,
//!     "props": { "title": "Welcome" },
//!     "displayName": "Hero Banner",
//!     "hidden": false,
//!     "nodes": [],
//!     "parent": "ROOT"
//!   }
//! }
//! ```
//!
//! Round-trip law: `from_canonical_json(to_canonical_json(d)) == d` for any
//! structurally valid `d`, and encoding is deterministic (BTreeMap key
//! order), so saving an unmodified document reproduces the same bytes.
//!
//! Unknown type tags are accepted on decode; resolving them is the render
//! pipeline's problem, which keeps old documents loadable after their
//! component types disappear from the registry.

use std::collections::BTreeMap;

use pagecraft_common::Props;
use serde::{Deserialize, Serialize};

use crate::{Document, DocumentError, Node, ROOT_ID};

#[derive(Debug, Serialize, Deserialize)]
struct WireType {
    #[serde(rename = "resolvedName")]
    resolved_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireNode {
    #[serde(rename = "type")]
    type_tag: WireType,

    #[serde(rename = "isCanvas", default)]
    is_canvas: bool,

    #[serde(default)]
    props: Props,

    #[serde(rename = "displayName", default)]
    display_name: String,

    #[serde(default)]
    hidden: bool,

    #[serde(default)]
    nodes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
}

/// Encode a document to its canonical JSON string.
pub fn to_canonical_json(document: &Document) -> Result<String, DocumentError> {
    let wire: BTreeMap<&str, WireNode> = document
        .nodes()
        .map(|node| {
            let display_name = if node.display_name.is_empty() {
                node.type_name.clone()
            } else {
                node.display_name.clone()
            };
            (
                node.id.as_str(),
                WireNode {
                    type_tag: WireType {
                        resolved_name: node.type_name.clone(),
                    },
                    is_canvas: node.is_canvas,
                    props: node.props.clone(),
                    display_name,
                    hidden: node.hidden,
                    nodes: node.children.clone(),
                    parent: node.parent.clone(),
                },
            )
        })
        .collect();

    Ok(serde_json::to_string(&wire)?)
}

/// Decode a canonical JSON string, aborting on the first malformed
/// condition. The returned document always satisfies
/// [`Document::validate`].
pub fn from_canonical_json(json: &str) -> Result<Document, DocumentError> {
    let wire: BTreeMap<String, WireNode> = serde_json::from_str(json)?;

    if !wire.contains_key(ROOT_ID) {
        return Err(DocumentError::MissingRoot);
    }

    let mut nodes = BTreeMap::new();
    for (id, entry) in wire {
        let parent = if id == ROOT_ID { None } else { entry.parent };
        let display_name = if entry.display_name.is_empty() {
            entry.type_tag.resolved_name.clone()
        } else {
            entry.display_name
        };
        nodes.insert(
            id.clone(),
            Node {
                id,
                type_name: entry.type_tag.resolved_name,
                display_name,
                props: entry.props,
                is_canvas: entry.is_canvas,
                hidden: entry.hidden,
                children: entry.nodes,
                parent,
            },
        );
    }

    // Parent back-references in stored blobs can be missing or stale; the
    // child lists are authoritative, so rebuild parents from them before
    // validating.
    let edges: Vec<(String, String)> = nodes
        .values()
        .flat_map(|node| {
            node.children
                .iter()
                .map(|child| (node.id.clone(), child.clone()))
                .collect::<Vec<_>>()
        })
        .collect();
    for (parent_id, child_id) in edges {
        match nodes.get_mut(&child_id) {
            Some(child) => child.parent = Some(parent_id),
            None => {
                return Err(DocumentError::UnknownChild {
                    parent: parent_id,
                    child: child_id,
                })
            }
        }
    }

    let document = Document::from_nodes(nodes);
    document.validate()?;
    Ok(document)
}
