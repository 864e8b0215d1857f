use dioxus::prelude::*;
use shared_types::Session;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;
use crate::session::use_session;

pub const BRAND_NAME: &str = "TPQ Asy-Syafi'i Campakoah";

/// Header, logout control and titled body shared by every dashboard.
#[component]
pub fn DashboardLayout(session: Session, title: String, children: Element) -> Element {
    let mut state = use_session();
    let role_label = session.role.label().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "dashboard-shell",
            header { class: "dashboard-header",
                div { class: "dashboard-brand",
                    div { class: "dashboard-brand-mark", "T" }
                    div {
                        h1 { class: "dashboard-brand-name", "{BRAND_NAME}" }
                        p { class: "dashboard-brand-role", "Dashboard {role_label}" }
                    }
                }
                div { class: "dashboard-user",
                    div { class: "dashboard-user-text",
                        p { class: "dashboard-user-name", "{session.display_name}" }
                        p { class: "dashboard-user-role", "{role_label}" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "dashboard-logout",
                        onclick: move |_| {
                            state.logout();
                            navigator().push(Route::Login {});
                        },
                        "Logout"
                    }
                }
            }
            main { class: "dashboard-main",
                div { class: "dashboard-panel",
                    h2 { class: "dashboard-title", "{title}" }
                    {children}
                }
            }
        }
    }
}
