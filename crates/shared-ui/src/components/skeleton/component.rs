use dioxus::prelude::*;

/// Pulsing placeholder blocks shown while data loads.
#[component]
pub fn Skeleton(
    #[props(default = 1)] count: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton-group", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-busy": "true",
            ..merged,
            for i in 0..count {
                div { key: "{i}", class: "skeleton" }
            }
        }
    }
}
