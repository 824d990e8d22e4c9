//! # Component Registry
//!
//! `register`/`resolve`/`list_types` over an explicit map. Lookup is
//! case-sensitive here; the assistant bridge layers its case-insensitive
//! fallback on top of [`Registry::resolve_case_insensitive`] without
//! changing the canonical path.

use std::collections::HashMap;

use pagecraft_common::{merge_props, Props};
use pagecraft_document::Node;

use crate::{builtin_definitions, ComponentDefinition, RegistryError};

/// Mapping from type tag to component definition. Additive: registration
/// never removes entries, and overwriting an existing tag keeps its palette
/// position.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, ComponentDefinition>,
    /// Palette order: curated built-ins first, then registration order.
    order: Vec<String>,
}

impl Registry {
    /// An empty registry. Mostly useful in tests; production sessions start
    /// from [`Registry::builtin`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The curated built-in library in its fixed palette order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for definition in builtin_definitions() {
            registry.register(definition);
        }
        registry
    }

    /// Add or overwrite an entry. Overwriting keeps the original palette
    /// position; new tags append after everything registered so far.
    pub fn register(&mut self, definition: ComponentDefinition) {
        let type_name = definition.type_name.clone();
        if !self.entries.contains_key(&type_name) {
            self.order.push(type_name.clone());
        }
        self.entries.insert(type_name, definition);
    }

    /// Case-sensitive lookup; the canonical path.
    pub fn resolve(&self, type_name: &str) -> Result<&ComponentDefinition, RegistryError> {
        self.entries
            .get(type_name)
            .ok_or_else(|| RegistryError::NotFound(type_name.to_string()))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Whether the tag names a curated built-in (as currently registered).
    pub fn is_builtin(&self, type_name: &str) -> bool {
        self.entries.get(type_name).is_some_and(|d| d.builtin)
    }

    /// Exact match first, then a scan in palette order ignoring ASCII case.
    /// Tolerates assistant-generated tags that differ only in case.
    pub fn resolve_case_insensitive(&self, type_name: &str) -> Option<&ComponentDefinition> {
        if let Some(definition) = self.entries.get(type_name) {
            return Some(definition);
        }
        self.order
            .iter()
            .find(|key| key.eq_ignore_ascii_case(type_name))
            .and_then(|key| self.entries.get(key))
    }

    /// All definitions in palette order.
    pub fn list_types(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Build a detached node of `type_name`: registry defaults first, then
    /// caller overrides shallow-merged on top. Fails on unknown tags.
    pub fn create_node(
        &self,
        id: impl Into<String>,
        type_name: &str,
        overrides: Option<Props>,
    ) -> Result<Node, RegistryError> {
        let definition = self.resolve(type_name)?;

        let mut props = definition.default_props.clone();
        if let Some(overrides) = overrides {
            merge_props(&mut props, &overrides);
        }

        Ok(Node::new(id, definition.type_name.clone(), props)
            .with_canvas(definition.is_canvas)
            .with_display_name(definition.display_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderTemplate;
    use serde_json::json;

    fn dynamic(name: &str) -> ComponentDefinition {
        ComponentDefinition::from_template(
            name,
            name,
            Props::new(),
            RenderTemplate::element("div"),
        )
    }

    #[test]
    fn test_builtin_palette_order() {
        let registry = Registry::builtin();
        let order: Vec<&str> = registry
            .list_types()
            .map(|d| d.type_name.as_str())
            .collect();
        assert_eq!(
            order,
            vec![
                "HeroBanner",
                "TextBlock",
                "Container",
                "AboutSection",
                "Statistics",
                "FacultyGrid",
                "FAQAccordion",
                "ContactForm",
                "Button",
                "DynamicSection",
            ]
        );
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = Registry::builtin();
        assert!(registry.resolve("HeroBanner").is_ok());
        assert!(matches!(
            registry.resolve("herobanner"),
            Err(RegistryError::NotFound(name)) if name == "herobanner"
        ));
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let registry = Registry::builtin();
        let definition = registry.resolve_case_insensitive("herobanner").unwrap();
        assert_eq!(definition.type_name, "HeroBanner");
        assert!(registry.resolve_case_insensitive("NoSuchThing").is_none());
    }

    #[test]
    fn test_dynamic_entries_append_after_builtins() {
        let mut registry = Registry::builtin();
        registry.register(dynamic("TestimonialSlider"));
        let last = registry.list_types().last().unwrap();
        assert_eq!(last.type_name, "TestimonialSlider");
        assert!(!registry.is_builtin("TestimonialSlider"));
        assert!(registry.is_builtin("HeroBanner"));
    }

    #[test]
    fn test_overwrite_keeps_palette_position() {
        let mut registry = Registry::builtin();
        let before: Vec<String> = registry
            .list_types()
            .map(|d| d.type_name.clone())
            .collect();

        registry.register(dynamic("TextBlock"));

        let after: Vec<String> = registry
            .list_types()
            .map(|d| d.type_name.clone())
            .collect();
        assert_eq!(before, after);
        // The entry itself was replaced.
        assert!(!registry.is_builtin("TextBlock"));
    }

    #[test]
    fn test_create_node_fills_defaults_and_merges_overrides() {
        let registry = Registry::builtin();
        let mut overrides = Props::new();
        overrides.insert("title".to_string(), json!("Welcome"));

        let node = registry
            .create_node("node-1", "HeroBanner", Some(overrides))
            .unwrap();

        assert_eq!(node.props["title"], json!("Welcome"));
        // Untouched defaults survive.
        assert_eq!(node.props["ctaText"], json!("Learn More"));
        assert!(!node.is_canvas());
        assert_eq!(node.display_name, "Hero Banner");
    }

    #[test]
    fn test_create_node_unknown_type() {
        let registry = Registry::builtin();
        assert!(matches!(
            registry.create_node("node-1", "Nonexistent", None),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn test_container_is_canvas() {
        let registry = Registry::builtin();
        let node = registry.create_node("node-1", "Container", None).unwrap();
        assert!(node.is_canvas());
    }
}
