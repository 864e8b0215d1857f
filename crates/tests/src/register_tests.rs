use crate::common::{client_for, spawn_api, unreachable_client, SeenBody};
use axum::{http::StatusCode, routing::post, Json, Router};
use client::api::register::{register, REGISTER_PATH};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, FormPhase, RegistrationField, RegistrationForm, MSG_REGISTER_FAILED,
    MSG_REGISTER_SUCCESS, SUCCESS_REDIRECT_DELAY,
};

fn filled_form(email: &str) -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.set_field(RegistrationField::FullName, "  Ahmad Fauzi  ".into());
    form.set_field(RegistrationField::Email, email.into());
    form.set_field(RegistrationField::Phone, " 081234567890 ".into());
    form.set_field(RegistrationField::Password, "bismillah".into());
    form.set_field(RegistrationField::PasswordConfirmation, "bismillah".into());
    form
}

fn accepting_api(seen: SeenBody) -> Router {
    Router::new().route(
        REGISTER_PATH,
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.record(body);
                (StatusCode::CREATED, Json(json!({ "message": "registrasi berhasil" })))
            }
        }),
    )
}

#[tokio::test]
async fn successful_registration_clears_draft_and_schedules_redirect() {
    let seen = SeenBody::default();
    let base = spawn_api(accepting_api(seen.clone())).await;
    let api = client_for(&base);

    let mut form = filled_form("   ");
    let request = form.begin_submit().expect("valid draft");
    assert_eq!(form.phase(), FormPhase::Submitting);

    let delay = form.complete(register(&api, &request).await);

    assert_eq!(delay, Some(SUCCESS_REDIRECT_DELAY));
    assert_eq!(form.phase(), FormPhase::SuccessSettling);
    assert_eq!(form.success(), Some(MSG_REGISTER_SUCCESS));
    assert_eq!(form.draft().full_name, "");
    assert_eq!(form.draft().password, "");
}

#[tokio::test]
async fn request_body_is_normalized() {
    let seen = SeenBody::default();
    let base = spawn_api(accepting_api(seen.clone())).await;
    let api = client_for(&base);

    let mut form = filled_form("   ");
    let request = form.begin_submit().expect("valid draft");
    register(&api, &request).await.expect("accepted");

    let body = seen.last().expect("body recorded");
    assert_eq!(
        body,
        json!({
            "nama_lengkap": "Ahmad Fauzi",
            "email": null,
            "no_telp": "081234567890",
            "password": "bismillah",
            "role": "wali",
        })
    );
}

#[tokio::test]
async fn present_email_is_sent() {
    let seen = SeenBody::default();
    let base = spawn_api(accepting_api(seen.clone())).await;
    let api = client_for(&base);

    let mut form = filled_form("wali@tpq.id");
    let request = form.begin_submit().expect("valid draft");
    register(&api, &request).await.expect("accepted");

    let body = seen.last().expect("body recorded");
    assert_eq!(body["email"], json!("wali@tpq.id"));
}

#[tokio::test]
async fn server_error_text_is_shown_verbatim() {
    let router = Router::new().route(
        REGISTER_PATH,
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({ "error": "Phone already registered" })),
            )
        }),
    );
    let api = client_for(&spawn_api(router).await);

    let mut form = filled_form("");
    let request = form.begin_submit().expect("valid draft");
    let result = register(&api, &request).await;

    let err = result.clone().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::RequestFailure);
    assert_eq!(err.status, Some(409));

    assert_eq!(form.complete(result), None);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.error(), Some("Phone already registered"));
    assert_eq!(form.draft().full_name, "  Ahmad Fauzi  ");
}

#[tokio::test]
async fn error_without_message_falls_back_to_generic_text() {
    let router = Router::new().route(
        REGISTER_PATH,
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({}))) }),
    );
    let api = client_for(&spawn_api(router).await);

    let mut form = filled_form("");
    let request = form.begin_submit().expect("valid draft");
    form.complete(register(&api, &request).await);

    assert_eq!(form.error(), Some(MSG_REGISTER_FAILED));
}

#[tokio::test]
async fn transport_failure_hides_exception_text() {
    let api = unreachable_client().await;

    let mut form = filled_form("");
    let request = form.begin_submit().expect("valid draft");
    let result = register(&api, &request).await;
    assert_eq!(
        result.as_ref().unwrap_err().kind,
        AppErrorKind::TransportFailure
    );

    form.complete(result);
    assert_eq!(form.error(), Some(MSG_REGISTER_FAILED));
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_server() {
    let seen = SeenBody::default();
    let _base = spawn_api(accepting_api(seen.clone())).await;

    let mut form = filled_form("");
    form.set_field(RegistrationField::Password, "abc".into());
    form.set_field(RegistrationField::PasswordConfirmation, "abc".into());

    assert!(form.begin_submit().is_none());
    assert_eq!(form.error(), Some("Password harus minimal 6 karakter"));
    assert_eq!(seen.last(), None);
}
