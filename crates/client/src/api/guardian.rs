use super::member_failed;
use crate::http::ApiClient;
use shared_types::{AnnouncementSnapshot, AppError, ChildSnapshot, GuardianOverview, ListResponse};

pub const CHILDREN_PATH: &str = "/api/wali/santri";
pub const ANNOUNCEMENTS_PATH: &str = "/api/pengumuman";

/// Fetch the guardian's children and the announcements concurrently.
/// Either failing discards both.
pub async fn fetch_guardian_overview(client: &ApiClient) -> Result<GuardianOverview, AppError> {
    let children = async {
        client
            .get_json::<ListResponse<ChildSnapshot>>(CHILDREN_PATH)
            .await
            .map(ListResponse::into_items)
            .map_err(|e| member_failed(CHILDREN_PATH, e))
    };
    let announcements = async {
        client
            .get_json::<ListResponse<AnnouncementSnapshot>>(ANNOUNCEMENTS_PATH)
            .await
            .map(ListResponse::into_items)
            .map_err(|e| member_failed(ANNOUNCEMENTS_PATH, e))
    };
    let (children, announcements) = futures::try_join!(children, announcements)?;
    Ok(GuardianOverview {
        children,
        announcements,
    })
}

/// Guardian overview, empty lists on any failure.
pub async fn load_guardian_overview(client: &ApiClient) -> GuardianOverview {
    super::or_default("guardian overview", fetch_guardian_overview(client)).await
}
