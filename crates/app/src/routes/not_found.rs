use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Halaman Tidak Ditemukan" }
                p { class: "not-found-message",
                    "Halaman "
                    code { "{path}" }
                    " tidak tersedia."
                }
                Link { to: Route::Home {}, class: "not-found-link", "Kembali ke Dashboard" }
            }
        }
    }
}
