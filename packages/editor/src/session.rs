//! # Edit Session
//!
//! One open document, one capability level, one undo history, one serialized
//! timeline of edits. All mutation goes through the session so capability
//! gating and the one-undo-entry-per-operation contract hold everywhere,
//! including for assistant-driven edits.

use pagecraft_common::{Capability, Props};
use pagecraft_document::{from_canonical_json, to_canonical_json, Document};
use pagecraft_registry::{Registry, RegistryError};
use pagecraft_renderer::{render_document, RenderMode, RenderOptions, VNode};
use tracing::{debug, info};

use crate::mutations::Mutation;
use crate::store::{PageMeta, PageStore, PersistedPage};
use crate::undo_stack::UndoStack;
use crate::{EditError, EditorError};

/// A single editing session over one document.
pub struct EditSession {
    /// Session identifier, for logs.
    pub id: String,

    capability: Capability,
    document: Document,
    registry: Registry,
    undo: UndoStack,

    /// Currently selected node ids (editable render marks them).
    selected_nodes: Vec<String>,

    /// Page metadata carried beside the tree.
    meta: PageMeta,

    save_in_flight: bool,
}

impl EditSession {
    /// Start a session over a fresh document (nothing saved yet).
    pub fn new(id: impl Into<String>, capability: Capability, registry: Registry) -> Self {
        Self {
            id: id.into(),
            capability,
            document: Document::empty(),
            registry,
            undo: UndoStack::new(),
            selected_nodes: Vec::new(),
            meta: PageMeta::default(),
            save_in_flight: false,
        }
    }

    /// Open a persisted page. A page with no saved document yet starts from
    /// the empty single-ROOT tree; a missing page surfaces the store's
    /// `NotFound`.
    pub fn open(
        id: impl Into<String>,
        capability: Capability,
        registry: Registry,
        store: &dyn PageStore,
        identifier: &str,
    ) -> Result<Self, EditorError> {
        let page = store.load(identifier)?;
        let document = match &page.document {
            Some(json) => from_canonical_json(json)?,
            None => Document::empty(),
        };

        let mut session = Self::new(id, capability, registry);
        session.document = document;
        session.meta = page.meta;
        info!(
            session = %session.id,
            identifier,
            nodes = session.document.len(),
            "opened page"
        );
        Ok(session)
    }

    // ---- accessors -------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut PageMeta {
        &mut self.meta
    }

    pub fn selected_nodes(&self) -> &[String] {
        &self.selected_nodes
    }

    pub fn set_selection(&mut self, node_ids: Vec<String>) {
        self.selected_nodes = node_ids;
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn save_pending(&self) -> bool {
        self.save_in_flight
    }

    // ---- mutations -------------------------------------------------------

    /// Create a node of `type_name` and attach it under `parent_id`,
    /// appending when `index` is `None`. Returns the new node's id.
    pub fn insert(
        &mut self,
        parent_id: &str,
        type_name: &str,
        props: Option<Props>,
        index: Option<usize>,
    ) -> Result<String, EditorError> {
        self.require_edit()?;

        let node_id = self.document.allocate_id();
        let node = self
            .registry
            .create_node(&node_id, type_name, props)
            .map_err(|RegistryError::NotFound(name)| EditError::UnknownType(name))?;

        self.apply("insert", Mutation::InsertNode {
            parent_id: parent_id.to_string(),
            index,
            node,
        })?;
        Ok(node_id)
    }

    /// Relocate `node_id` (with its subtree) under `new_parent_id`.
    pub fn move_node(
        &mut self,
        node_id: &str,
        new_parent_id: &str,
        index: usize,
    ) -> Result<(), EditorError> {
        self.require_edit()?;
        self.apply("move", Mutation::Move {
            node_id: node_id.to_string(),
            new_parent_id: new_parent_id.to_string(),
            index,
        })
    }

    /// Remove `node_id` and its entire subtree.
    pub fn delete(&mut self, node_id: &str) -> Result<(), EditorError> {
        self.require_edit()?;
        self.selected_nodes.retain(|id| id != node_id);
        self.apply("delete", Mutation::Delete {
            node_id: node_id.to_string(),
        })
    }

    /// Shallow-merge `patch` into the node's props.
    pub fn set_props(&mut self, node_id: &str, patch: Props) -> Result<(), EditorError> {
        self.require_edit()?;
        self.apply("setProps", Mutation::SetProps {
            node_id: node_id.to_string(),
            patch,
        })
    }

    /// Revert the most recent operation. Returns false (not an error) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        self.require_edit()?;
        match self.undo.undo(&mut self.document) {
            Some(label) => {
                self.document.version += 1;
                debug!(session = %self.id, label, "undid operation");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn apply(&mut self, label: &'static str, mutation: Mutation) -> Result<(), EditorError> {
        let inverse = mutation.apply(&mut self.document, &self.registry)?;
        self.undo.push(label, inverse);
        self.document.version += 1;
        debug!(
            session = %self.id,
            label,
            version = self.document.version,
            "applied mutation"
        );
        Ok(())
    }

    pub(crate) fn require_edit(&self) -> Result<(), EditorError> {
        if self.capability.can_edit() {
            Ok(())
        } else {
            Err(EditorError::Forbidden(self.capability))
        }
    }

    // ---- rendering -------------------------------------------------------

    /// Render the current tree. Editable mode is reserved for editor/admin
    /// capability; frozen mode is open to everyone.
    pub fn render(&self, mode: RenderMode) -> Result<VNode, EditorError> {
        if mode == RenderMode::Editable {
            self.require_edit()?;
        }
        let options = match mode {
            RenderMode::Editable => {
                RenderOptions::editable().with_selected(self.selected_nodes.clone())
            }
            RenderMode::Frozen => RenderOptions::frozen(),
        };
        Ok(render_document(&self.document, &self.registry, &options))
    }

    // ---- persistence -----------------------------------------------------

    /// Canonical JSON for the current tree.
    pub fn serialize(&self) -> Result<String, EditorError> {
        Ok(to_canonical_json(&self.document)?)
    }

    /// Snapshot the document for an asynchronous save. Fails while a prior
    /// save is unresolved, so out-of-order writes can't clobber newer state.
    pub fn begin_save(&mut self) -> Result<String, EditorError> {
        if self.save_in_flight {
            return Err(EditorError::SaveInFlight);
        }
        let json = self.serialize()?;
        self.save_in_flight = true;
        Ok(json)
    }

    /// Mark the in-flight save as resolved (success or failure).
    pub fn finish_save(&mut self) {
        self.save_in_flight = false;
    }

    /// Synchronous save convenience: snapshot, write, resolve. A failed
    /// save leaves the in-memory edits intact.
    pub fn save_to(
        &mut self,
        store: &mut dyn PageStore,
        identifier: &str,
    ) -> Result<(), EditorError> {
        let json = self.begin_save()?;
        let page = PersistedPage {
            document: Some(json),
            meta: self.meta.clone(),
        };
        let result = store.save(identifier, &page);
        self.finish_save();
        result?;
        info!(session = %self.id, identifier, "saved page");
        Ok(())
    }
}
