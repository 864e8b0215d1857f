use serde::{Deserialize, Serialize};

/// One child of the signed-in guardian, as listed by `GET /api/wali/santri`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildSnapshot {
    #[serde(rename = "nama_lengkap")]
    pub name: String,
    #[serde(rename = "kelas", default)]
    pub class_label: String,
    /// Attendance share, 0 to 100.
    #[serde(rename = "kehadiran", default)]
    pub attendance_percent: f64,
    #[serde(rename = "aktivitas_terakhir", default)]
    pub last_activity: String,
}

impl ChildSnapshot {
    /// Attendance for display, e.g. `95%`.
    pub fn attendance_label(&self) -> String {
        let pct = self.attendance_percent.clamp(0.0, 100.0);
        format!("{}%", pct.round() as u32)
    }
}

/// `{ "data": [...] }` list body. `meta` and other keys are ignored; a
/// `null` list reads as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Announcement type kept from staff-only notices.
pub const ANNOUNCEMENT_INTERNAL: &str = "internal";

/// An announcement from `GET /api/pengumuman`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementSnapshot {
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "tanggal_dibuat", alias = "tanggal", default)]
    pub date: String,
    /// `publik` or `internal`.
    #[serde(rename = "tipe", default)]
    pub kind: String,
    #[serde(rename = "penting", default)]
    pub flagged: bool,
}

impl AnnouncementSnapshot {
    /// Internal notices and explicitly flagged ones are highlighted.
    pub fn is_important(&self) -> bool {
        self.flagged || self.kind == ANNOUNCEMENT_INTERNAL
    }

    /// Calendar part of the timestamp, e.g. `2024-11-25`.
    pub fn date_label(&self) -> &str {
        self.date.split('T').next().unwrap_or_default()
    }
}

/// Everything the guardian dashboard renders besides the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardianOverview {
    pub children: Vec<ChildSnapshot>,
    pub announcements: Vec<AnnouncementSnapshot>,
}
