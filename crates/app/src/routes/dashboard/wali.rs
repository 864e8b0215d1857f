use dioxus::prelude::*;
use shared_types::{AnnouncementSnapshot, ChildSnapshot, GuardianOverview};
use shared_ui::{Badge, BadgeVariant, Card, Skeleton};

use super::Welcome;
use crate::routes::layout::DashboardLayout;
use crate::session::use_session;

#[component]
pub fn WaliDashboard() -> Element {
    let session = use_session();

    let overview = use_resource(move || {
        let api = session.api_client();
        async move { client::api::guardian::load_guardian_overview(&api).await }
    });

    let Some(current) = session.current.read().clone() else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        DashboardLayout { session: current.clone(), title: "Dashboard Wali Santri",
            Welcome { name: current.display_name.clone(), audience: "Wali Santri" }
            match &*overview.read() {
                Some(loaded) => rsx! { GuardianPanels { overview: loaded.clone() } },
                None => rsx! { Skeleton { count: 2 } },
            }
        }
    }
}

/// Children and announcements for one guardian.
#[component]
pub fn GuardianPanels(overview: GuardianOverview) -> Element {
    rsx! {
        div { class: "dashboard-children",
            if overview.children.is_empty() {
                p { class: "dashboard-empty", "Belum ada data santri." }
            }
            for (i, child) in overview.children.iter().enumerate() {
                ChildCard { key: "{i}", child: child.clone() }
            }
        }
        Card { class: "dashboard-announcements", title: "Pengumuman Terbaru",
            if overview.announcements.is_empty() {
                p { class: "dashboard-empty", "Belum ada pengumuman." }
            }
            for (i, item) in overview.announcements.iter().enumerate() {
                AnnouncementRow { key: "{i}", item: item.clone() }
            }
        }
    }
}

#[component]
fn ChildCard(child: ChildSnapshot) -> Element {
    let attendance = child.attendance_label();
    rsx! {
        Card { class: "dashboard-child", title: "Informasi Santri",
            dl { class: "dashboard-child-facts",
                dt { "Nama Santri:" }
                dd { "{child.name}" }
                dt { "Kelas:" }
                dd { "{child.class_label}" }
                dt { "Kehadiran:" }
                dd { class: "dashboard-attendance", "{attendance}" }
                dt { "Aktivitas Terakhir:" }
                dd { "{child.last_activity}" }
            }
        }
    }
}

#[component]
fn AnnouncementRow(item: AnnouncementSnapshot) -> Element {
    let important = item.is_important();
    let date = item.date_label().to_string();
    rsx! {
        div {
            class: "dashboard-announcement",
            "data-important": important,
            div {
                h5 { "{item.title}" }
                p { class: "dashboard-announcement-date", "Tanggal: {date}" }
            }
            if important {
                Badge { variant: BadgeVariant::Important, "Penting" }
            }
        }
    }
}
