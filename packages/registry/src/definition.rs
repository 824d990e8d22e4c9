//! Component definitions: everything the editor needs to know about one
//! type tag: defaults, palette metadata, settings fields, and which
//! renderer the pipeline should invoke.

use pagecraft_common::Props;
use serde::{Deserialize, Serialize};

use crate::RenderTemplate;

/// One registered component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Canonical, case-sensitive type tag (`"HeroBanner"`).
    pub type_name: String,

    /// Palette label (`"Hero Banner"`).
    pub display_name: String,

    /// One-line palette description.
    pub description: String,

    /// Template merged under caller props when a node is created.
    pub default_props: Props,

    /// Whether nodes of this type own children.
    pub is_canvas: bool,

    /// Structural/default components can opt out of deletion.
    pub deletable: bool,

    /// Fields the settings panel exposes for this type.
    pub settings: Vec<SettingField>,

    /// How the render pipeline produces output for this type.
    pub renderer: RendererRef,

    /// True for the curated library; dynamic (assistant-defined) entries
    /// are false. Overwriting a built-in is an explicit policy decision.
    pub builtin: bool,
}

impl ComponentDefinition {
    /// A dynamic definition rendered through a declarative template.
    pub fn from_template(
        type_name: impl Into<String>,
        display_name: impl Into<String>,
        default_props: Props,
        template: RenderTemplate,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            display_name: display_name.into(),
            description: String::new(),
            default_props,
            is_canvas: false,
            deletable: true,
            settings: Vec::new(),
            renderer: RendererRef::Template(template),
            builtin: false,
        }
    }
}

/// Renderer reference stored per type. The registry holds data only; the
/// render pipeline interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum RendererRef {
    /// One of the built-in block renderers.
    Builtin(BuiltinKind),
    /// A declarative template, used for assistant-defined components.
    Template(RenderTemplate),
}

/// The built-in block set of the portal builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinKind {
    HeroBanner,
    TextBlock,
    Container,
    AboutSection,
    Statistics,
    FacultyGrid,
    FaqAccordion,
    ContactForm,
    Button,
    DynamicSection,
}

/// One editable field in the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingField {
    /// Prop name this field writes.
    pub name: String,
    /// Label shown next to the input.
    pub label: String,
    /// Input widget kind.
    pub input: SettingInput,
}

impl SettingField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, input: SettingInput) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input,
        }
    }
}

/// Input widget kinds the original settings panels use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SettingInput {
    Text,
    MultilineText,
    Color,
    Select { options: Vec<String> },
}
