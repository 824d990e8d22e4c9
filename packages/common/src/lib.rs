//! # Pagecraft Common
//!
//! Shared primitives used across the pagecraft workspace:
//!
//! - [`Capability`]: the session capability level that gates editing
//! - [`Props`]: the JSON prop map every node and component definition carries
//!
//! This crate sits at the bottom of the dependency graph and must stay
//! small; anything document- or registry-shaped belongs upstream.

mod capability;
mod props;

pub use capability::Capability;
pub use props::{merge_props, prop_array, prop_bool, prop_str, Props};
