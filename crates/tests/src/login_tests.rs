use crate::common::{client_for, spawn_api, SeenBody};
use axum::{http::StatusCode, routing::post, Json, Router};
use client::api::auth::{login, LOGIN_PATH};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, LoginRequest, Role};

fn login_api(seen: SeenBody, role: &'static str) -> Router {
    Router::new().route(
        LOGIN_PATH,
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.record(body);
                Json(json!({
                    "message": "login berhasil",
                    "token": "jwt-abc",
                    "user": {
                        "id_user": "0b6c9a52-2f1e-4e7a-9d53-2a4f7c1e9b10",
                        "nama_lengkap": "Ustadzah Aisyah",
                        "email": "aisyah@tpq.id",
                        "no_telp": "0812",
                        "role": role,
                    }
                }))
            }
        }),
    )
}

#[tokio::test]
async fn login_response_becomes_session() {
    let seen = SeenBody::default();
    let api = client_for(&spawn_api(login_api(seen, "super_admin")).await);

    let session = login(&api, &LoginRequest::from_identifier("aisyah@tpq.id", "rahasia"))
        .await
        .expect("login succeeds");

    assert_eq!(session.user_id, "0b6c9a52-2f1e-4e7a-9d53-2a4f7c1e9b10");
    assert_eq!(session.display_name, "Ustadzah Aisyah");
    assert_eq!(session.role, Role::SuperAdmin);
    assert_eq!(session.auth_token, "jwt-abc");
}

#[tokio::test]
async fn unknown_role_is_kept_raw() {
    let seen = SeenBody::default();
    let api = client_for(&spawn_api(login_api(seen, "bendahara")).await);

    let session = login(&api, &LoginRequest::from_identifier("Bendahara TPQ", "rahasia"))
        .await
        .expect("login succeeds");

    assert_eq!(session.role, Role::Other("bendahara".into()));
    assert_eq!(session.role.label(), "bendahara");
}

#[tokio::test]
async fn phone_identifier_is_sent_as_no_telp() {
    let seen = SeenBody::default();
    let api = client_for(&spawn_api(login_api(seen.clone(), "wali")).await);

    login(&api, &LoginRequest::from_identifier(" 081234567890 ", "rahasia"))
        .await
        .expect("login succeeds");

    assert_eq!(
        seen.last(),
        Some(json!({ "no_telp": "081234567890", "password": "rahasia" }))
    );
}

#[tokio::test]
async fn rejected_credentials_carry_server_text() {
    let router = Router::new().route(
        LOGIN_PATH,
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "password salah" })),
            )
        }),
    );
    let api = client_for(&spawn_api(router).await);

    let err = login(&api, &LoginRequest::from_identifier("wali@tpq.id", "keliru"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::RequestFailure);
    assert_eq!(err.status, Some(401));
    assert_eq!(err.user_message("Login gagal. Periksa koneksi Anda."), "password salah");
}
