pub mod admin;
pub mod super_admin;
pub mod wali;

pub use admin::AdminDashboard;
pub use super_admin::SuperAdminDashboard;
pub use wali::WaliDashboard;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGraduationCap, LdShield, LdUsers, LdWallet};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::StatCard;

use super::layout::DashboardLayout;
use crate::routes::Route;
use crate::session::use_session;

/// Dashboard route for a role, `None` for roles without one.
pub fn dashboard_route(role: &Role) -> Option<Route> {
    match role {
        Role::SuperAdmin => Some(Route::SuperAdminDashboard {}),
        Role::Admin => Some(Route::AdminDashboard {}),
        Role::Wali => Some(Route::WaliDashboard {}),
        Role::Other(_) => None,
    }
}

const SUPER_ADMIN_ONLY: &[Role] = &[Role::SuperAdmin];
const STAFF: &[Role] = &[Role::Admin, Role::SuperAdmin];
const EVERY_ROLE: &[Role] = &[Role::Wali, Role::Admin, Role::SuperAdmin];

/// Roles allowed on a dashboard route. `None` admits any session.
pub fn allowed_roles(route: &Route) -> Option<&'static [Role]> {
    match route {
        Route::SuperAdminDashboard {} => Some(SUPER_ADMIN_ONLY),
        Route::AdminDashboard {} => Some(STAFF),
        Route::WaliDashboard {} => Some(EVERY_ROLE),
        _ => None,
    }
}

/// Where a signed-in `role` is sent when it may not open `route`.
/// `None` lets the route render.
pub fn role_redirect(route: &Route, role: &Role) -> Option<Route> {
    match allowed_roles(route) {
        Some(roles) if !roles.contains(role) => {
            Some(dashboard_route(role).unwrap_or(Route::Login {}))
        }
        _ => None,
    }
}

/// `/` sends the user on to the dashboard of their role.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let current = session.current.read().clone();

    let Some(current) = current else {
        return rsx! {};
    };

    match dashboard_route(&current.role) {
        Some(route) => {
            navigator().replace(route);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Memuat dashboard..." }
                }
            }
        }
        None => rsx! {
            DashboardLayout { session: current, title: "Dashboard",
                p { class: "dashboard-notice",
                    "Peran akun Anda belum memiliki dashboard. Hubungi pengurus TPQ."
                }
            }
        },
    }
}

/// Greeting shown at the top of every dashboard.
#[component]
pub fn Welcome(name: String, audience: String) -> Element {
    rsx! {
        div { class: "dashboard-welcome",
            h3 { "Selamat datang, {name}!" }
            p { "Anda login sebagai {audience}" }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Users,
    Admins,
    Santri,
    Donasi,
}

fn stat_icon(icon: StatIcon) -> Element {
    match icon {
        StatIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
        StatIcon::Admins => rsx! { Icon::<LdShield> { icon: LdShield, width: 24, height: 24 } },
        StatIcon::Santri => rsx! {
            Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 }
        },
        StatIcon::Donasi => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 24, height: 24 } },
    }
}

/// One stat card's content.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub href: Option<&'static str>,
    pub icon: StatIcon,
}

#[component]
pub fn StatGrid(tiles: Vec<StatTile>) -> Element {
    rsx! {
        div { class: "dashboard-stats",
            for tile in tiles {
                StatCard {
                    key: "{tile.label}",
                    label: tile.label,
                    value: tile.value.clone(),
                    href: tile.href.unwrap_or_default(),
                    icon: stat_icon(tile.icon),
                }
            }
        }
    }
}

/// A link to a management page outside this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureLink {
    pub name: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const ADMIN_FEATURES: &[FeatureLink] = &[
    FeatureLink {
        name: "Kelola Santri",
        description: "Tambah, edit, dan kelola data santri",
        href: "/admin/santri",
    },
    FeatureLink {
        name: "Input Kehadiran",
        description: "Catat kehadiran santri harian",
        href: "/admin/kehadiran",
    },
    FeatureLink {
        name: "Lihat Pembayaran",
        description: "Monitor pembayaran syahriah",
        href: "/admin/pembayaran",
    },
    FeatureLink {
        name: "Laporan Bulanan",
        description: "Generate laporan periodik",
        href: "/admin/laporan",
    },
];

/// Grid of plain anchors; the targets are served elsewhere.
#[component]
pub fn FeatureGrid(title: String, links: &'static [FeatureLink]) -> Element {
    rsx! {
        section { class: "dashboard-features",
            h4 { "{title}" }
            div { class: "dashboard-feature-grid",
                for link in links {
                    a { key: "{link.href}", class: "dashboard-feature", href: link.href,
                        span { class: "dashboard-feature-name", "{link.name}" }
                        span { class: "dashboard-feature-description", "{link.description}" }
                    }
                }
            }
        }
    }
}
