use dioxus::prelude::*;

/// A labelled input that reports its value as a plain `String`.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] hint: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_input: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field",
            label { class: "form-field-label", r#for: "{id}",
                "{label}"
                if required {
                    span { class: "form-field-required", " *" }
                }
            }
            input {
                class: "form-field-input",
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                required,
                disabled,
                oninput: move |evt| on_input.call(evt.value()),
            }
            if !hint.is_empty() {
                p { class: "form-field-hint", "{hint}" }
            }
        }
    }
}
