//! Prop map helpers.
//!
//! Node props are plain JSON objects. `serde_json::Map` is BTreeMap-backed,
//! which keeps every serialization of the same props byte-identical.

use serde_json::{Map, Value};

/// JSON prop map carried by every node and component definition.
pub type Props = Map<String, Value>;

/// Shallow-merge `patch` into `props`. Later keys win; nested objects are
/// replaced wholesale, not merged.
pub fn merge_props(props: &mut Props, patch: &Props) {
    for (key, value) in patch {
        props.insert(key.clone(), value.clone());
    }
}

/// Read a string prop, falling back to `default` when absent or not a string.
pub fn prop_str<'a>(props: &'a Props, key: &str, default: &'a str) -> &'a str {
    props.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// Read a boolean prop, falling back to `default`.
pub fn prop_bool(props: &Props, key: &str, default: bool) -> bool {
    props.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Read an array prop, empty when absent or not an array.
pub fn prop_array<'a>(props: &'a Props, key: &str) -> &'a [Value] {
    props.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}
