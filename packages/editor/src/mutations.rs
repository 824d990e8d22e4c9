//! # Structural Mutations
//!
//! Semantic operations on the page tree.
//!
//! ## Design
//!
//! 1. **Validate first**: every precondition is checked against the current
//!    tree before anything changes; a rejected mutation is a no-op.
//! 2. **Atomic**: each mutation is one undo step.
//! 3. **Invertible**: applying returns the inverse record the undo stack
//!    replays later.
//!
//! ## Semantics
//!
//! - `InsertNode`: attach a freshly created node under a canvas parent.
//! - `Move`: relocate a node (and its subtree) to a new canvas parent;
//!   fails if the target is the node itself or any descendant.
//! - `Delete`: remove a node and its entire subtree.
//! - `SetProps`: shallow-merge a patch into the node's props.

use pagecraft_common::{merge_props, Props};
use pagecraft_document::{Document, Node, ROOT_ID};
use pagecraft_registry::Registry;
use serde::{Deserialize, Serialize};

use crate::EditError;

/// One atomic edit. `InsertNode` carries the already-created node so the
/// assigned id is known before application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    InsertNode {
        parent_id: String,
        index: Option<usize>,
        node: Node,
    },

    Move {
        node_id: String,
        new_parent_id: String,
        index: usize,
    },

    Delete {
        node_id: String,
    },

    SetProps {
        node_id: String,
        patch: Props,
    },
}

/// Record that undoes one applied mutation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum InverseOp {
    /// Undo an insert: drop the subtree that was added.
    RemoveSubtree { node_id: String },

    /// Undo a delete: put the saved subtree back where it was.
    RestoreSubtree {
        parent_id: String,
        index: usize,
        /// Depth-first, subtree root first; internal edges intact.
        nodes: Vec<Node>,
    },

    /// Undo a move: put the node back at its old position.
    MoveBack {
        node_id: String,
        parent_id: String,
        index: usize,
    },

    /// Undo a prop patch: restore the full previous prop map.
    RestoreProps { node_id: String, props: Props },
}

impl Mutation {
    /// Check every precondition without touching the tree.
    pub fn validate(&self, document: &Document, registry: &Registry) -> Result<(), EditError> {
        match self {
            Mutation::InsertNode {
                parent_id, node, ..
            } => {
                if document.contains(&node.id) {
                    return Err(EditError::DuplicateId(node.id.clone()));
                }
                require_canvas(document, parent_id)
            }

            Mutation::Move {
                node_id,
                new_parent_id,
                ..
            } => {
                if !document.contains(node_id) {
                    return Err(EditError::NodeNotFound(node_id.clone()));
                }
                if node_id == ROOT_ID {
                    return Err(EditError::RootImmutable);
                }
                require_canvas(document, new_parent_id)?;
                if document.is_within(new_parent_id, node_id) {
                    return Err(EditError::Cycle {
                        node_id: node_id.clone(),
                        new_parent_id: new_parent_id.clone(),
                    });
                }
                Ok(())
            }

            Mutation::Delete { node_id } => {
                let node = document
                    .get(node_id)
                    .ok_or_else(|| EditError::NodeNotFound(node_id.clone()))?;
                if node_id == ROOT_ID {
                    return Err(EditError::RootImmutable);
                }
                // Types absent from the registry are deletable; the flag
                // only protects registered structural components.
                if let Ok(definition) = registry.resolve(&node.type_name) {
                    if !definition.deletable {
                        return Err(EditError::NotDeletable(node_id.clone()));
                    }
                }
                Ok(())
            }

            Mutation::SetProps { node_id, .. } => {
                if !document.contains(node_id) {
                    return Err(EditError::NodeNotFound(node_id.clone()));
                }
                Ok(())
            }
        }
    }

    /// Validate, apply, and return the inverse record.
    pub(crate) fn apply(
        &self,
        document: &mut Document,
        registry: &Registry,
    ) -> Result<InverseOp, EditError> {
        self.validate(document, registry)?;

        match self {
            Mutation::InsertNode {
                parent_id,
                index,
                node,
            } => {
                document.add_node(node.clone());
                document.attach(parent_id, &node.id, *index);
                Ok(InverseOp::RemoveSubtree {
                    node_id: node.id.clone(),
                })
            }

            Mutation::Move {
                node_id,
                new_parent_id,
                index,
            } => {
                // Validation guarantees a non-ROOT node, which always has a
                // parent in a well-formed tree.
                let (old_parent, old_index) = document
                    .detach(node_id)
                    .ok_or_else(|| EditError::NodeNotFound(node_id.clone()))?;
                document.attach(new_parent_id, node_id, Some(*index));
                Ok(InverseOp::MoveBack {
                    node_id: node_id.clone(),
                    parent_id: old_parent,
                    index: old_index,
                })
            }

            Mutation::Delete { node_id } => {
                let (parent_id, index) = document
                    .detach(node_id)
                    .ok_or_else(|| EditError::NodeNotFound(node_id.clone()))?;
                let nodes: Vec<Node> = document
                    .subtree_ids(node_id)
                    .iter()
                    .filter_map(|id| document.remove_node(id))
                    .collect();
                Ok(InverseOp::RestoreSubtree {
                    parent_id,
                    index,
                    nodes,
                })
            }

            Mutation::SetProps { node_id, patch } => {
                let node = document
                    .get_mut(node_id)
                    .ok_or_else(|| EditError::NodeNotFound(node_id.clone()))?;
                let previous = node.props.clone();
                merge_props(&mut node.props, patch);
                Ok(InverseOp::RestoreProps {
                    node_id: node_id.clone(),
                    props: previous,
                })
            }
        }
    }
}

impl InverseOp {
    /// Replay this record against the tree. Inverses bypass policy checks
    /// (deletability, capability); they restore recorded state exactly.
    pub(crate) fn apply(&self, document: &mut Document) {
        match self {
            InverseOp::RemoveSubtree { node_id } => {
                document.detach(node_id);
                for id in document.subtree_ids(node_id) {
                    document.remove_node(&id);
                }
            }

            InverseOp::RestoreSubtree {
                parent_id,
                index,
                nodes,
            } => {
                let root_id = match nodes.first() {
                    Some(root) => root.id.clone(),
                    None => return,
                };
                for node in nodes {
                    document.add_node(node.clone());
                }
                document.attach(parent_id, &root_id, Some(*index));
            }

            InverseOp::MoveBack {
                node_id,
                parent_id,
                index,
            } => {
                document.detach(node_id);
                document.attach(parent_id, node_id, Some(*index));
            }

            InverseOp::RestoreProps { node_id, props } => {
                if let Some(node) = document.get_mut(node_id) {
                    node.props = props.clone();
                }
            }
        }
    }
}

fn require_canvas(document: &Document, parent_id: &str) -> Result<(), EditError> {
    match document.get(parent_id) {
        Some(parent) if parent.is_canvas() => Ok(()),
        // Missing and non-canvas parents fail the same way: the id does
        // not resolve to a canvas node.
        _ => Err(EditError::InvalidParent(parent_id.to_string())),
    }
}
