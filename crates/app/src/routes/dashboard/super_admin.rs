use dioxus::prelude::*;
use shared_types::{format_rupiah, AggregateStats};

use super::{FeatureGrid, FeatureLink, StatGrid, StatIcon, StatTile, Welcome, ADMIN_FEATURES};
use crate::routes::layout::DashboardLayout;
use crate::session::use_session;

pub const SUPER_ADMIN_FEATURES: &[FeatureLink] = &[
    FeatureLink {
        name: "Manajemen User",
        description: "Kelola semua pengguna sistem",
        href: "/super-admin/users",
    },
    FeatureLink {
        name: "Data Pengumuman",
        description: "Buat dan kelola pengumuman",
        href: "/super-admin/pengumuman",
    },
    FeatureLink {
        name: "Data Berita",
        description: "Kelola konten berita TPQ",
        href: "/super-admin/berita",
    },
    FeatureLink {
        name: "Informasi TPQ",
        description: "Kelola profil dan informasi TPQ",
        href: "/super-admin/informasi-tpq",
    },
    FeatureLink {
        name: "Data Santri",
        description: "Akses data santri semua TPQ",
        href: "/super-admin/santri",
    },
    FeatureLink {
        name: "Data Syahriah",
        description: "Monitor pembayaran syahriah",
        href: "/super-admin/syahriah",
    },
    FeatureLink {
        name: "Data Donasi",
        description: "Kelola donasi sistem",
        href: "/super-admin/donasi",
    },
    FeatureLink {
        name: "Rekap Keuangan",
        description: "Laporan keuangan lengkap",
        href: "/super-admin/keuangan",
    },
    FeatureLink {
        name: "System Logs",
        description: "Monitor aktivitas sistem",
        href: "/super-admin/logs",
    },
];

/// The four system totals as linked stat cards.
pub fn stat_tiles(stats: &AggregateStats) -> Vec<StatTile> {
    vec![
        StatTile {
            label: "Total Pengguna",
            value: stats.total_users.to_string(),
            href: Some("/super-admin/users"),
            icon: StatIcon::Users,
        },
        StatTile {
            label: "Admin TPQ",
            value: stats.total_admins.to_string(),
            href: Some("/super-admin/admins"),
            icon: StatIcon::Admins,
        },
        StatTile {
            label: "Total Santri",
            value: stats.total_santri.to_string(),
            href: Some("/super-admin/santri"),
            icon: StatIcon::Santri,
        },
        StatTile {
            label: "Total Donasi",
            value: format_rupiah(stats.total_donasi),
            href: Some("/super-admin/donasi"),
            icon: StatIcon::Donasi,
        },
    ]
}

#[component]
pub fn SuperAdminDashboard() -> Element {
    let session = use_session();

    // Zeros until the joined fetch lands, and for good on any failure.
    let stats = use_resource(move || {
        let api = session.api_client();
        async move { client::api::stats::load_aggregate_stats(&api).await }
    });

    let Some(current) = session.current.read().clone() else {
        return rsx! {};
    };
    let totals = stats.read().as_ref().copied().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        DashboardLayout { session: current.clone(), title: "Dashboard Super Admin",
            Welcome { name: current.display_name.clone(), audience: "Super Administrator" }
            StatGrid { tiles: stat_tiles(&totals) }
            FeatureGrid { title: "Fitur Super Admin", links: SUPER_ADMIN_FEATURES }
            FeatureGrid { title: "Fitur Admin", links: ADMIN_FEATURES }
        }
    }
}
