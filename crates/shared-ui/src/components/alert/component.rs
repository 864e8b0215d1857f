use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertTone {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertTone {
    fn class(&self) -> &'static str {
        match self {
            AlertTone::Error => "error",
            AlertTone::Success => "success",
            AlertTone::Info => "info",
        }
    }
}

/// Inline banner for form feedback.
#[component]
pub fn Alert(
    #[props(default)] tone: AlertTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
        Attribute::new("role", "alert", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}
