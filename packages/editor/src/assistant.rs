//! # Assistant Bridge
//!
//! Applies operations produced by the external natural-language translator.
//! The bridge never sees the prompt text; it receives one typed operation
//! per call and turns it into at most one edit-engine call, so the
//! one-undo-entry-per-request contract holds for assistant edits too.
//!
//! Type resolution tolerates model-generated casing: exact registry lookup
//! first, then a case-insensitive fallback, and only then
//! `UnknownComponent`, with no partial mutation on failure.

use pagecraft_common::Props;
use pagecraft_document::ROOT_ID;
use pagecraft_registry::{ComponentDefinition, RenderTemplate, SettingField};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{EditSession, EditorError};

/// Operation payload from the translator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum AssistantOperation {
    /// Insert an existing component type at the end of ROOT's children.
    #[serde(rename = "insert-component")]
    InsertComponent { component: ComponentPayload },

    /// Shallow-merge a prop patch into an existing node.
    #[serde(rename = "replace-props")]
    ReplaceProps {
        #[serde(rename = "nodeId")]
        node_id: String,
        props: Props,
    },

    /// Register a new component definition from a declarative render spec.
    #[serde(rename = "define-component")]
    DefineComponent {
        name: String,
        #[serde(rename = "renderSpec")]
        render_spec: RenderSpec,
        /// Replacing a built-in requires this explicit flag.
        #[serde(default)]
        overwrite: bool,
    },
}

/// Component reference inside an insert operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPayload {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub props: Props,
}

/// Declarative definition of a new component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,

    #[serde(rename = "defaultProps", default)]
    pub default_props: Props,

    pub template: RenderTemplate,

    #[serde(default)]
    pub settings: Vec<SettingField>,
}

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("unknown component type: {0}")]
    UnknownComponent(String),

    #[error("component {0} is a built-in; set overwrite to replace it")]
    BuiltinCollision(String),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Result of a successfully applied operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedOperation {
    Inserted { node_id: String },
    Patched { node_id: String },
    Defined { type_name: String },
}

/// Apply one translator-produced operation against the session.
pub fn apply_operation(
    session: &mut EditSession,
    operation: AssistantOperation,
) -> Result<AppliedOperation, AssistantError> {
    match operation {
        AssistantOperation::InsertComponent { component } => {
            insert_component(session, component)
        }
        AssistantOperation::ReplaceProps { node_id, props } => {
            session.set_props(&node_id, props)?;
            info!(node_id = %node_id, "assistant patched props");
            Ok(AppliedOperation::Patched { node_id })
        }
        AssistantOperation::DefineComponent {
            name,
            render_spec,
            overwrite,
        } => define_component(session, name, render_spec, overwrite),
    }
}

fn insert_component(
    session: &mut EditSession,
    component: ComponentPayload,
) -> Result<AppliedOperation, AssistantError> {
    let canonical = match session.registry().resolve_case_insensitive(&component.type_name) {
        Some(definition) => definition.type_name.clone(),
        None => return Err(AssistantError::UnknownComponent(component.type_name)),
    };
    if canonical != component.type_name {
        warn!(
            requested = %component.type_name,
            resolved = %canonical,
            "assistant type name resolved via case-insensitive fallback"
        );
    }

    let props = if component.props.is_empty() {
        None
    } else {
        Some(component.props)
    };
    let node_id = session.insert(ROOT_ID, &canonical, props, None)?;
    info!(node_id = %node_id, type_name = %canonical, "assistant inserted component");
    Ok(AppliedOperation::Inserted { node_id })
}

fn define_component(
    session: &mut EditSession,
    name: String,
    render_spec: RenderSpec,
    overwrite: bool,
) -> Result<AppliedOperation, AssistantError> {
    session.require_edit().map_err(AssistantError::Editor)?;

    if session.registry().is_builtin(&name) && !overwrite {
        return Err(AssistantError::BuiltinCollision(name));
    }

    let is_canvas = render_spec.template.has_children_slot();
    let display_name = render_spec.display_name.unwrap_or_else(|| name.clone());

    let mut definition = ComponentDefinition::from_template(
        name.clone(),
        display_name,
        render_spec.default_props,
        render_spec.template,
    );
    definition.is_canvas = is_canvas;
    definition.settings = render_spec.settings;

    session.registry_mut().register(definition);
    info!(type_name = %name, "assistant defined component");
    Ok(AppliedOperation::Defined { type_name: name })
}
