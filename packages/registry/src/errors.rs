//! Error types for registry lookups.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unknown component type: {0}")]
    NotFound(String),
}
