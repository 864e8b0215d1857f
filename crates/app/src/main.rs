use dioxus::prelude::*;

mod routes;
mod session;

use routes::Route;
use session::SessionState;

const THEME: Asset = asset!("/assets/tpq.css");

fn main() {
    client::config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::restore);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Memuat..." }
                }
            },
            Router::<Route> {}
        }
    }
}
