//! Interpreter for declarative render templates.
//!
//! `{name}` placeholders in text, attribute, and style values resolve
//! against the current scope: the node's props at the top level, or the
//! current array item inside an `Each` body.

use pagecraft_common::Props;
use pagecraft_registry::RenderTemplate;
use serde_json::Value;

use crate::VNode;

pub(crate) fn render_template(
    template: &RenderTemplate,
    props: &Props,
    children: Vec<VNode>,
) -> VNode {
    let mut children = Some(children);
    let rendered = render_scoped(template, props, props, &mut children);
    match rendered.into_iter().next() {
        Some(vnode) => vnode,
        // A bare `Each` over a missing prop can produce nothing; give the
        // pipeline an element to annotate rather than nothing at all.
        None => VNode::element("div"),
    }
}

/// Render one template node within `scope`. `Each` may fan out to several
/// VNodes, hence the Vec. `slot` is consumed by the first `Children`
/// marker encountered.
fn render_scoped(
    template: &RenderTemplate,
    props: &Props,
    scope: &Props,
    slot: &mut Option<Vec<VNode>>,
) -> Vec<VNode> {
    match template {
        RenderTemplate::Text { value } => vec![VNode::text(interpolate(value, scope))],

        RenderTemplate::Element {
            tag,
            attrs,
            styles,
            children,
        } => {
            let mut element = VNode::element(tag.clone());
            for (key, value) in attrs {
                element = element.with_attr(key.clone(), interpolate(value, scope));
            }
            for (key, value) in styles {
                element = element.with_style(key.clone(), interpolate(value, scope));
            }
            for child in children {
                element = element.with_children(render_scoped(child, props, scope, slot));
            }
            vec![element]
        }

        RenderTemplate::Each { prop, body } => {
            let items = match props.get(prop).and_then(Value::as_array) {
                Some(items) => items,
                None => return Vec::new(),
            };
            items
                .iter()
                .flat_map(|item| {
                    let item_scope = match item {
                        Value::Object(map) => map.clone(),
                        other => {
                            // Scalar items become `{value}` in the body.
                            let mut map = Props::new();
                            map.insert("value".to_string(), other.clone());
                            map
                        }
                    };
                    render_scoped(body, props, &item_scope, slot)
                })
                .collect()
        }

        RenderTemplate::Children => slot.take().unwrap_or_default(),
    }
}

/// Replace `{name}` with the scope value's string form. Unknown names are
/// left in place so a typo in a generated template stays visible.
fn interpolate(input: &str, scope: &Props) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match scope.get(name) {
                    Some(Value::String(s)) => out.push_str(s),
                    Some(Value::Null) | None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                    Some(other) => out.push_str(&other.to_string()),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
