//! VDOM construction for the built-in block set.
//!
//! Each function mirrors the markup shape of the corresponding portal
//! block: a wrapping section/div, headings from props, and (for the
//! container) the rendered children slotted in.

use pagecraft_common::{prop_array, prop_str, Props};
use pagecraft_document::Node;
use pagecraft_registry::BuiltinKind;
use serde_json::Value;

use crate::VNode;

pub(crate) fn render_builtin(kind: BuiltinKind, node: &Node, children: Vec<VNode>) -> VNode {
    let props = &node.props;
    match kind {
        BuiltinKind::HeroBanner => hero_banner(props),
        BuiltinKind::TextBlock => text_block(props),
        BuiltinKind::Container => container(props, children),
        BuiltinKind::AboutSection => about_section(props),
        BuiltinKind::Statistics => statistics(props),
        BuiltinKind::FacultyGrid => faculty_grid(props),
        BuiltinKind::FaqAccordion => faq_accordion(props),
        BuiltinKind::ContactForm => contact_form(props),
        BuiltinKind::Button => button(props),
        BuiltinKind::DynamicSection => dynamic_section(props, children),
    }
}

fn item_str<'a>(item: &'a Value, key: &str) -> &'a str {
    item.get(key).and_then(Value::as_str).unwrap_or("")
}

fn hero_banner(props: &Props) -> VNode {
    let background = prop_str(props, "backgroundImage", "");
    let mut root = VNode::element("div").with_attr("class", "hero-banner");
    if !background.is_empty() {
        root = root.with_style("background-image", format!("url({background})"));
    }
    root.with_child(VNode::element("h1").with_child(VNode::text(prop_str(props, "title", ""))))
        .with_child(VNode::element("p").with_child(VNode::text(prop_str(props, "subtitle", ""))))
        .with_child(
            VNode::element("a")
                .with_attr("class", "hero-cta")
                .with_attr("href", prop_str(props, "ctaLink", "#"))
                .with_child(VNode::text(prop_str(props, "ctaText", "Learn More"))),
        )
}

fn text_block(props: &Props) -> VNode {
    VNode::element("div")
        .with_attr("class", "text-block")
        .with_style("font-size", prop_str(props, "fontSize", "16px"))
        .with_style("text-align", prop_str(props, "textAlign", "left"))
        .with_child(VNode::text(prop_str(props, "content", "")))
}

fn container(props: &Props, children: Vec<VNode>) -> VNode {
    VNode::element("div")
        .with_attr("class", "container")
        .with_style("background-color", prop_str(props, "backgroundColor", "#ffffff"))
        .with_style("padding", prop_str(props, "padding", "16px"))
        .with_style("min-height", prop_str(props, "minHeight", "auto"))
        .with_children(children)
}

fn about_section(props: &Props) -> VNode {
    let image = prop_str(props, "imageUrl", "");
    let mut section = VNode::element("section")
        .with_attr("class", "about-section")
        .with_child(VNode::element("h2").with_child(VNode::text(prop_str(props, "title", ""))))
        .with_child(VNode::element("p").with_child(VNode::text(prop_str(props, "content", ""))));
    if !image.is_empty() {
        section = section.with_child(
            VNode::element("img")
                .with_attr("src", image)
                .with_attr("alt", prop_str(props, "title", "")),
        );
    }
    section
}

fn statistics(props: &Props) -> VNode {
    let mut grid = VNode::element("div").with_attr("class", "stats-grid");
    for stat in prop_array(props, "stats") {
        grid = grid.with_child(
            VNode::element("div")
                .with_attr("class", "stat")
                .with_child(
                    VNode::element("span")
                        .with_attr("class", "stat-value")
                        .with_child(VNode::text(item_str(stat, "value"))),
                )
                .with_child(
                    VNode::element("span")
                        .with_attr("class", "stat-label")
                        .with_child(VNode::text(item_str(stat, "label"))),
                ),
        );
    }
    VNode::element("section")
        .with_attr("class", "statistics")
        .with_style("background-color", prop_str(props, "backgroundColor", "#f8fafc"))
        .with_style("color", prop_str(props, "textColor", "#1e293b"))
        .with_child(grid)
}

fn faculty_grid(props: &Props) -> VNode {
    let mut grid = VNode::element("div").with_attr("class", "faculty-cards");
    for member in prop_array(props, "members") {
        let mut card = VNode::element("div").with_attr("class", "faculty-card");
        let image = item_str(member, "image");
        if !image.is_empty() {
            card = card.with_child(
                VNode::element("img")
                    .with_attr("src", image)
                    .with_attr("alt", item_str(member, "name")),
            );
        }
        grid = grid.with_child(
            card.with_child(VNode::element("h3").with_child(VNode::text(item_str(member, "name"))))
                .with_child(
                    VNode::element("span")
                        .with_attr("class", "faculty-role")
                        .with_child(VNode::text(item_str(member, "role"))),
                )
                .with_child(
                    VNode::element("p").with_child(VNode::text(item_str(member, "description"))),
                ),
        );
    }
    VNode::element("section")
        .with_attr("class", "faculty-grid")
        .with_child(VNode::element("h2").with_child(VNode::text(prop_str(props, "title", ""))))
        .with_child(grid)
}

fn faq_accordion(props: &Props) -> VNode {
    let mut list = VNode::element("div").with_attr("class", "faq-items");
    for item in prop_array(props, "items") {
        list = list.with_child(
            VNode::element("details")
                .with_attr("class", "faq-item")
                .with_child(
                    VNode::element("summary")
                        .with_child(VNode::text(item_str(item, "question"))),
                )
                .with_child(VNode::element("p").with_child(VNode::text(item_str(item, "answer")))),
        );
    }
    VNode::element("section")
        .with_attr("class", "faq-accordion")
        .with_child(VNode::element("h2").with_child(VNode::text(prop_str(props, "title", ""))))
        .with_child(list)
}

fn contact_form(props: &Props) -> VNode {
    let details = VNode::element("div")
        .with_attr("class", "contact-details")
        .with_child(VNode::element("p").with_child(VNode::text(prop_str(props, "address", ""))))
        .with_child(VNode::element("p").with_child(VNode::text(prop_str(props, "phone", ""))))
        .with_child(VNode::element("p").with_child(VNode::text(prop_str(props, "email", ""))));

    let form = VNode::element("form")
        .with_attr("class", "contact-form-fields")
        .with_child(
            VNode::element("input")
                .with_attr("name", "name")
                .with_attr("placeholder", "Your Name"),
        )
        .with_child(
            VNode::element("input")
                .with_attr("name", "email")
                .with_attr("placeholder", "Your Email"),
        )
        .with_child(
            VNode::element("textarea")
                .with_attr("name", "message")
                .with_attr("placeholder", "Your Message"),
        )
        .with_child(VNode::element("button").with_child(VNode::text("Send Message")));

    VNode::element("section")
        .with_attr("class", "contact-form")
        .with_child(VNode::element("h2").with_child(VNode::text(prop_str(props, "title", ""))))
        .with_child(VNode::element("p").with_child(VNode::text(prop_str(props, "description", ""))))
        .with_child(details)
        .with_child(form)
}

fn button(props: &Props) -> VNode {
    let variant = prop_str(props, "variant", "primary");
    let size = prop_str(props, "size", "md");
    VNode::element("button")
        .with_attr("class", format!("btn btn-{variant} btn-{size}"))
        .with_style("border-radius", prop_str(props, "borderRadius", "8px"))
        .with_child(VNode::text(prop_str(props, "text", "Click Me")))
}

fn dynamic_section(props: &Props, children: Vec<VNode>) -> VNode {
    VNode::element("section")
        .with_attr("class", "dynamic-section")
        .with_style("background-color", prop_str(props, "backgroundColor", "#ffffff"))
        .with_style("color", prop_str(props, "textColor", "#1e293b"))
        .with_style("padding", prop_str(props, "padding", "64px 24px"))
        .with_style("text-align", prop_str(props, "alignment", "center"))
        .with_child(VNode::element("h2").with_child(VNode::text(prop_str(props, "title", ""))))
        .with_child(VNode::element("h3").with_child(VNode::text(prop_str(props, "subtitle", ""))))
        .with_child(VNode::element("p").with_child(VNode::text(prop_str(props, "content", ""))))
        .with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_hero_banner_markup() {
        let p = props(json!({
            "title": "Welcome",
            "subtitle": "Hello",
            "backgroundImage": "/img/campus.jpg",
            "ctaText": "Apply",
            "ctaLink": "/apply"
        }));
        let vnode = hero_banner(&p);

        match &vnode {
            VNode::Element { styles, children, .. } => {
                assert_eq!(
                    styles.get("background-image").map(String::as_str),
                    Some("url(/img/campus.jpg)")
                );
                assert_eq!(children.len(), 3);
                assert_eq!(children[2].attr("href"), Some("/apply"));
            }
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn test_statistics_one_entry_per_stat() {
        let p = props(json!({
            "stats": [
                {"label": "Students", "value": "5000+"},
                {"label": "Courses", "value": "40+"}
            ]
        }));
        let vnode = statistics(&p);
        let grid = &vnode.children()[0];
        assert_eq!(grid.children().len(), 2);
    }

    #[test]
    fn test_container_slots_children() {
        let p = props(json!({"backgroundColor": "#fafafa"}));
        let vnode = container(&p, vec![VNode::text("child")]);
        assert_eq!(vnode.children(), &[VNode::text("child")]);
    }

    #[test]
    fn test_faq_uses_details_elements() {
        let p = props(json!({
            "title": "FAQ",
            "items": [{"question": "Q1", "answer": "A1"}]
        }));
        let vnode = faq_accordion(&p);
        let list = &vnode.children()[1];
        match &list.children()[0] {
            VNode::Element { tag, .. } => assert_eq!(tag, "details"),
            _ => panic!("expected element"),
        }
    }
}
