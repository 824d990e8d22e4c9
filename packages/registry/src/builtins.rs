//! The curated built-in block library for institutional portals.
//!
//! Default props, display names, and settings fields mirror what each
//! block's settings panel exposes. Order here is the fixed palette order.

use pagecraft_common::Props;
use serde_json::{json, Value};

use crate::{BuiltinKind, ComponentDefinition, RendererRef, SettingField, SettingInput};

fn props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}

fn definition(
    kind: BuiltinKind,
    type_name: &str,
    display_name: &str,
    description: &str,
    is_canvas: bool,
    default_props: Value,
    settings: Vec<SettingField>,
) -> ComponentDefinition {
    ComponentDefinition {
        type_name: type_name.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        default_props: props(default_props),
        is_canvas,
        deletable: true,
        settings,
        renderer: RendererRef::Builtin(kind),
        builtin: true,
    }
}

/// All built-in definitions in palette order.
pub fn builtin_definitions() -> Vec<ComponentDefinition> {
    vec![
        definition(
            BuiltinKind::HeroBanner,
            "HeroBanner",
            "Hero Banner",
            "Main landing section with title and background.",
            false,
            json!({
                "title": "Welcome to Our Institution",
                "subtitle": "Excellence in Education",
                "backgroundImage": "",
                "ctaText": "Learn More",
                "ctaLink": "#",
            }),
            vec![
                SettingField::new("title", "Title", SettingInput::Text),
                SettingField::new("subtitle", "Subtitle", SettingInput::Text),
                SettingField::new("backgroundImage", "Background Image URL", SettingInput::Text),
                SettingField::new("ctaText", "CTA Text", SettingInput::Text),
                SettingField::new("ctaLink", "CTA Link", SettingInput::Text),
            ],
        ),
        definition(
            BuiltinKind::TextBlock,
            "TextBlock",
            "Text Block",
            "Simple text section with title and description.",
            false,
            json!({
                "content": "Enter your text here...",
                "fontSize": "16px",
                "textAlign": "left",
            }),
            vec![
                SettingField::new("content", "Content", SettingInput::MultilineText),
                SettingField::new(
                    "fontSize",
                    "Font Size",
                    SettingInput::Select {
                        options: vec![
                            "14px".to_string(),
                            "16px".to_string(),
                            "18px".to_string(),
                            "24px".to_string(),
                        ],
                    },
                ),
                SettingField::new(
                    "textAlign",
                    "Alignment",
                    SettingInput::Select {
                        options: vec![
                            "left".to_string(),
                            "center".to_string(),
                            "right".to_string(),
                        ],
                    },
                ),
            ],
        ),
        definition(
            BuiltinKind::Container,
            "Container",
            "Container",
            "A layout container to hold other components.",
            true,
            json!({
                "backgroundColor": "#ffffff",
                "padding": "16px",
            }),
            vec![
                SettingField::new("backgroundColor", "Background Color", SettingInput::Color),
                SettingField::new(
                    "padding",
                    "Padding",
                    SettingInput::Select {
                        options: vec![
                            "0px".to_string(),
                            "8px".to_string(),
                            "16px".to_string(),
                            "24px".to_string(),
                            "32px".to_string(),
                        ],
                    },
                ),
                SettingField::new(
                    "minHeight",
                    "Min Height",
                    SettingInput::Select {
                        options: vec![
                            "auto".to_string(),
                            "100px".to_string(),
                            "300px".to_string(),
                            "500px".to_string(),
                            "800px".to_string(),
                            "100vh".to_string(),
                        ],
                    },
                ),
            ],
        ),
        definition(
            BuiltinKind::AboutSection,
            "AboutSection",
            "About Section",
            "About us section with image and text.",
            false,
            json!({
                "title": "About Us",
                "content": "Our institution has been a beacon of excellence...",
                "imageUrl": "",
            }),
            vec![
                SettingField::new("title", "Title", SettingInput::Text),
                SettingField::new("content", "Content", SettingInput::MultilineText),
                SettingField::new("imageUrl", "Image URL", SettingInput::Text),
            ],
        ),
        definition(
            BuiltinKind::Statistics,
            "Statistics",
            "Statistics",
            "Display institution numbers and achievements.",
            false,
            json!({
                "stats": [
                    { "label": "Students", "value": "5000+", "icon": "Users" },
                    { "label": "Courses", "value": "40+", "icon": "GraduationCap" },
                    { "label": "Campuses", "value": "3", "icon": "Building2" },
                    { "label": "Awards", "value": "15+", "icon": "Trophy" },
                ],
                "backgroundColor": "#f8fafc",
                "textColor": "#1e293b",
            }),
            vec![
                SettingField::new("backgroundColor", "Background Color", SettingInput::Color),
                SettingField::new("textColor", "Text Color", SettingInput::Color),
            ],
        ),
        definition(
            BuiltinKind::FacultyGrid,
            "FacultyGrid",
            "Faculty Grid",
            "Display faculty members in a grid.",
            false,
            json!({
                "title": "Our Expert Faculty",
                "members": [
                    {
                        "name": "Dr. Sarah Johnson",
                        "role": "Head of Department",
                        "image": "",
                        "description": "Ph.D. in Computer Science with 15 years of experience."
                    },
                    {
                        "name": "Prof. Michael Chen",
                        "role": "Associate Professor",
                        "image": "",
                        "description": "Expert in AI and Machine Learning."
                    },
                    {
                        "name": "Dr. Emily Brown",
                        "role": "Assistant Professor",
                        "image": "",
                        "description": "Focuses on Data Structures and Algorithms."
                    }
                ],
                "columns": 3,
            }),
            vec![SettingField::new("title", "Title", SettingInput::Text)],
        ),
        definition(
            BuiltinKind::FaqAccordion,
            "FAQAccordion",
            "FAQ Accordion",
            "Expandable list of questions and answers.",
            false,
            json!({
                "title": "Frequently Asked Questions",
                "items": [
                    {
                        "question": "What are the admission requirements?",
                        "answer": "Admission requirements vary by course. Generally, we require high school transcripts and an entrance exam."
                    },
                    {
                        "question": "How can I apply for a scholarship?",
                        "answer": "Details about scholarships and the application process can be found on our Admissions page."
                    },
                    {
                        "question": "What facilities are available on campus?",
                        "answer": "Our campus features state-of-the-art labs, a library, sports facilities, and high-speed Wi-Fi."
                    }
                ],
            }),
            vec![SettingField::new("title", "Title", SettingInput::Text)],
        ),
        definition(
            BuiltinKind::ContactForm,
            "ContactForm",
            "Contact Form",
            "Contact section with details and a form.",
            false,
            json!({
                "title": "Get in Touch",
                "description": "We would love to hear from you. Fill out the form and we will get back to you soon.",
                "address": "123 Education Lane, Academic City, State 45678",
                "phone": "+91 1234567890",
                "email": "info@institution.edu.in",
            }),
            vec![
                SettingField::new("title", "Title", SettingInput::Text),
                SettingField::new("description", "Description", SettingInput::MultilineText),
                SettingField::new("address", "Address", SettingInput::Text),
                SettingField::new("phone", "Phone", SettingInput::Text),
                SettingField::new("email", "Email", SettingInput::Text),
            ],
        ),
        definition(
            BuiltinKind::Button,
            "Button",
            "Button",
            "A call-to-action button.",
            false,
            json!({
                "text": "Click Me",
                "variant": "primary",
                "size": "md",
                "borderRadius": "8px",
            }),
            vec![
                SettingField::new("text", "Text", SettingInput::Text),
                SettingField::new(
                    "variant",
                    "Variant",
                    SettingInput::Select {
                        options: vec![
                            "primary".to_string(),
                            "secondary".to_string(),
                            "outline".to_string(),
                        ],
                    },
                ),
                SettingField::new(
                    "size",
                    "Size",
                    SettingInput::Select {
                        options: vec!["sm".to_string(), "md".to_string(), "lg".to_string()],
                    },
                ),
            ],
        ),
        definition(
            BuiltinKind::DynamicSection,
            "DynamicSection",
            "Dynamic Section",
            "A generic section with title, subtitle and content.",
            false,
            json!({
                "title": "Your Title Here",
                "subtitle": "Your Subtitle Here",
                "content": "Add your custom content here...",
                "backgroundColor": "#ffffff",
                "textColor": "#1e293b",
                "padding": "64px 24px",
                "alignment": "center",
            }),
            vec![
                SettingField::new("title", "Title", SettingInput::Text),
                SettingField::new("subtitle", "Subtitle", SettingInput::Text),
                SettingField::new("content", "Content", SettingInput::MultilineText),
                SettingField::new("backgroundColor", "Background Color", SettingInput::Color),
                SettingField::new("textColor", "Text Color", SettingInput::Color),
                SettingField::new(
                    "alignment",
                    "Alignment",
                    SettingInput::Select {
                        options: vec![
                            "left".to_string(),
                            "center".to_string(),
                            "right".to_string(),
                        ],
                    },
                ),
            ],
        ),
    ]
}
