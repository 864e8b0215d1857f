use super::member_failed;
use crate::http::ApiClient;
use shared_types::{AdminOverview, AggregateStats, AppError, TotalResponse};

pub const USERS_TOTAL_PATH: &str = "/api/users/total";
pub const ADMINS_TOTAL_PATH: &str = "/api/admins/total";
pub const SANTRI_TOTAL_PATH: &str = "/api/santri/total";
pub const DONASI_TOTAL_PATH: &str = "/api/donasi/total";

/// Fetch one `{ total }` endpoint.
pub async fn fetch_total(client: &ApiClient, path: &str) -> Result<u64, AppError> {
    let body: TotalResponse = client.get_json(path).await?;
    Ok(body.count())
}

async fn member(client: &ApiClient, path: &'static str) -> Result<u64, AppError> {
    fetch_total(client, path)
        .await
        .map_err(|e| member_failed(path, e))
}

/// Fetch the four system totals concurrently.
///
/// All-or-nothing: the first failing member aborts the join with an
/// `AggregationFailure` and no partial result is produced.
pub async fn fetch_aggregate_stats(client: &ApiClient) -> Result<AggregateStats, AppError> {
    let (total_users, total_admins, total_santri, total_donasi) = futures::try_join!(
        member(client, USERS_TOTAL_PATH),
        member(client, ADMINS_TOTAL_PATH),
        member(client, SANTRI_TOTAL_PATH),
        member(client, DONASI_TOTAL_PATH),
    )?;
    Ok(AggregateStats {
        total_users,
        total_admins,
        total_santri,
        total_donasi,
    })
}

/// Totals for the admin overview, joined the same way.
pub async fn fetch_admin_overview(client: &ApiClient) -> Result<AdminOverview, AppError> {
    let (total_santri, total_users, total_donasi) = futures::try_join!(
        member(client, SANTRI_TOTAL_PATH),
        member(client, USERS_TOTAL_PATH),
        member(client, DONASI_TOTAL_PATH),
    )?;
    Ok(AdminOverview {
        total_santri,
        total_users,
        total_donasi,
    })
}

/// Super-admin totals, zeros on any failure.
pub async fn load_aggregate_stats(client: &ApiClient) -> AggregateStats {
    super::or_default("aggregate stats", fetch_aggregate_stats(client)).await
}

/// Admin totals, zeros on any failure.
pub async fn load_admin_overview(client: &ApiClient) -> AdminOverview {
    super::or_default("admin overview", fetch_admin_overview(client)).await
}
