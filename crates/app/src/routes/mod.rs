pub mod dashboard;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;

use crate::session::use_session;
use dashboard::{role_redirect, AdminDashboard, Home, SuperAdminDashboard, WaliDashboard};
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[route("/")]
    Home {},
    #[route("/super-admin")]
    SuperAdminDashboard {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/wali")]
    WaliDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Renders a dashboard only for a session whose role may open it.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let current = session.current.read().clone();

    let Some(current) = current else {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Mengalihkan ke halaman login..." }
            }
        };
    };

    match role_redirect(&route, &current.role) {
        None => rsx! { Outlet::<Route> {} },
        Some(target) => {
            tracing::warn!(role = %current.role.as_str(), ?route, "role not allowed on route");
            navigator().replace(target);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Mengalihkan ke dashboard Anda..." }
                }
            }
        }
    }
}
