//! # Pagecraft Registry
//!
//! The component registry: an explicit mapping from type tag to renderer
//! reference, default-props template, and settings descriptor. Unknown tags
//! are a checked [`RegistryError::NotFound`], never silent fallthrough.
//!
//! The registry starts from a curated built-in library (the institutional
//! portal block set) and grows at runtime when the assistant defines new
//! components. `list_types` keeps a stable order: built-ins in curated
//! order first, then dynamic entries in registration order. That order is
//! what the editor palette shows.

mod builtins;
mod definition;
mod errors;
mod registry;
mod template;

pub use builtins::builtin_definitions;
pub use definition::{
    BuiltinKind, ComponentDefinition, RendererRef, SettingField, SettingInput,
};
pub use errors::RegistryError;
pub use registry::Registry;
pub use template::RenderTemplate;
