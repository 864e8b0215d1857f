use crate::common::{client_for, server_error, spawn_api, total, SeenAuth};
use axum::{http::HeaderMap, routing::get, Router};
use client::api::stats::{
    fetch_admin_overview, fetch_aggregate_stats, load_admin_overview, load_aggregate_stats,
    ADMINS_TOTAL_PATH, DONASI_TOTAL_PATH, SANTRI_TOTAL_PATH, USERS_TOTAL_PATH,
};
use pretty_assertions::assert_eq;
use shared_types::{AdminOverview, AggregateStats, AppErrorKind};

fn all_three() -> Router {
    Router::new()
        .route(USERS_TOTAL_PATH, get(|| async { total(3) }))
        .route(ADMINS_TOTAL_PATH, get(|| async { total(3) }))
        .route(SANTRI_TOTAL_PATH, get(|| async { total(3) }))
        .route(DONASI_TOTAL_PATH, get(|| async { total(3) }))
}

#[tokio::test]
async fn every_total_is_displayed() {
    let api = client_for(&spawn_api(all_three()).await);

    let stats = load_aggregate_stats(&api).await;

    assert_eq!(
        stats,
        AggregateStats {
            total_users: 3,
            total_admins: 3,
            total_santri: 3,
            total_donasi: 3,
        }
    );
}

#[tokio::test]
async fn one_failing_member_leaves_all_totals_at_zero() {
    let router = Router::new()
        .route(USERS_TOTAL_PATH, get(|| async { total(3) }))
        .route(ADMINS_TOTAL_PATH, get(|| async { server_error("db down") }))
        .route(SANTRI_TOTAL_PATH, get(|| async { total(3) }))
        .route(DONASI_TOTAL_PATH, get(|| async { total(3) }));
    let api = client_for(&spawn_api(router).await);

    let err = fetch_aggregate_stats(&api).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::AggregationFailure);
    assert!(err.message.contains(ADMINS_TOTAL_PATH), "{}", err.message);

    assert_eq!(load_aggregate_stats(&api).await, AggregateStats::default());
}

#[tokio::test]
async fn missing_endpoint_counts_as_failure() {
    let router = Router::new()
        .route(USERS_TOTAL_PATH, get(|| async { total(3) }))
        .route(ADMINS_TOTAL_PATH, get(|| async { total(3) }))
        .route(SANTRI_TOTAL_PATH, get(|| async { total(3) }));
    let api = client_for(&spawn_api(router).await);

    assert_eq!(load_aggregate_stats(&api).await, AggregateStats::default());
}

#[tokio::test]
async fn fractional_and_missing_totals_are_counted() {
    let router = Router::new()
        .route(SANTRI_TOTAL_PATH, get(|| async { axum::Json(serde_json::json!({ "total": 42.0 })) }))
        .route(USERS_TOTAL_PATH, get(|| async { axum::Json(serde_json::json!({})) }))
        .route(DONASI_TOTAL_PATH, get(|| async { total(1_500_000) }));
    let api = client_for(&spawn_api(router).await);

    let overview = fetch_admin_overview(&api).await.expect("joined");

    assert_eq!(
        overview,
        AdminOverview {
            total_santri: 42,
            total_users: 0,
            total_donasi: 1_500_000,
        }
    );
}

#[tokio::test]
async fn admin_overview_degrades_to_zeros() {
    let router = Router::new()
        .route(SANTRI_TOTAL_PATH, get(|| async { total(10) }))
        .route(USERS_TOTAL_PATH, get(|| async { total(20) }))
        .route(DONASI_TOTAL_PATH, get(|| async { server_error("timeout") }));
    let api = client_for(&spawn_api(router).await);

    assert_eq!(load_admin_overview(&api).await, AdminOverview::default());
}

#[tokio::test]
async fn bearer_token_is_forwarded_to_every_member() {
    let seen = SeenAuth::default();
    let record = |seen: SeenAuth| {
        move |headers: HeaderMap| {
            let seen = seen.clone();
            async move {
                seen.record(&headers);
                total(1)
            }
        }
    };
    let router = Router::new()
        .route(USERS_TOTAL_PATH, get(record(seen.clone())))
        .route(ADMINS_TOTAL_PATH, get(record(seen.clone())))
        .route(SANTRI_TOTAL_PATH, get(record(seen.clone())))
        .route(DONASI_TOTAL_PATH, get(record(seen.clone())));
    let api = client_for(&spawn_api(router).await).with_token("jwt-abc");

    fetch_aggregate_stats(&api).await.expect("joined");

    let headers = seen.all();
    assert_eq!(headers.len(), 4);
    assert!(headers
        .iter()
        .all(|h| h.as_deref() == Some("Bearer jwt-abc")));
}

#[tokio::test]
async fn anonymous_client_sends_no_authorization() {
    let seen = SeenAuth::default();
    let recorder = seen.clone();
    let router = Router::new().route(
        SANTRI_TOTAL_PATH,
        get(move |headers: HeaderMap| {
            let recorder = recorder.clone();
            async move {
                recorder.record(&headers);
                total(5)
            }
        }),
    );
    let api = client_for(&spawn_api(router).await);

    let n = client::api::stats::fetch_total(&api, SANTRI_TOTAL_PATH)
        .await
        .expect("total");

    assert_eq!(n, 5);
    assert_eq!(seen.all(), vec![None]);
}
