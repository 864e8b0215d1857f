use dioxus::prelude::*;
use shared_types::{format_rupiah, AdminOverview};

use super::{FeatureGrid, StatGrid, StatIcon, StatTile, Welcome, ADMIN_FEATURES};
use crate::routes::layout::DashboardLayout;
use crate::session::use_session;

pub fn overview_tiles(overview: &AdminOverview) -> Vec<StatTile> {
    vec![
        StatTile {
            label: "Total Santri",
            value: overview.total_santri.to_string(),
            href: None,
            icon: StatIcon::Santri,
        },
        StatTile {
            label: "Total Pengguna",
            value: overview.total_users.to_string(),
            href: None,
            icon: StatIcon::Users,
        },
        StatTile {
            label: "Total Donasi",
            value: format_rupiah(overview.total_donasi),
            href: None,
            icon: StatIcon::Donasi,
        },
    ]
}

#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();

    let overview = use_resource(move || {
        let api = session.api_client();
        async move { client::api::stats::load_admin_overview(&api).await }
    });

    let Some(current) = session.current.read().clone() else {
        return rsx! {};
    };
    let totals = overview.read().as_ref().copied().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        DashboardLayout { session: current.clone(), title: "Dashboard Admin",
            Welcome { name: current.display_name.clone(), audience: "Administrator" }
            StatGrid { tiles: overview_tiles(&totals) }
            FeatureGrid { title: "Aksi Cepat", links: ADMIN_FEATURES }
        }
    }
}
