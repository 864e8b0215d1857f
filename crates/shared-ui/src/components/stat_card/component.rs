use dioxus::prelude::*;

/// One headline number on a dashboard.
///
/// A non-empty `href` turns the whole card into a link to the matching
/// management page.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] href: String,
    #[props(default = VNode::empty())] icon: Element,
) -> Element {
    let body = rsx! {
        div { class: "stat-card-icon", {icon} }
        div { class: "stat-card-body",
            span { class: "stat-card-value", "{value}" }
            span { class: "stat-card-label", "{label}" }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if href.is_empty() {
            div { class: "stat-card", {body} }
        } else {
            a { class: "stat-card", "data-link": "true", href: "{href}", {body} }
        }
    }
}
