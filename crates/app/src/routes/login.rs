use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{Alert, AlertTone, Button, Card, FormField};

use crate::routes::Route;
use crate::session::use_session;

pub const MSG_LOGIN_FAILED: &str = "Login gagal. Periksa koneksi Anda.";
pub const MSG_PASSWORD_REQUIRED: &str = "Password harus diisi";

/// Build the login request, rejecting an empty password locally.
pub fn login_request(identifier: &str, password: &str) -> Result<LoginRequest, AppError> {
    if password.is_empty() {
        return Err(AppError::validation("password", MSG_PASSWORD_REQUIRED));
    }
    Ok(LoginRequest::from_identifier(identifier, password))
}

/// Sign-in page. Accepts an email, a phone number or a full name.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.is_signed_in() {
        navigator().replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if loading() {
            return;
        }
        error_msg.set(None);

        let request = match login_request(&identifier(), &password()) {
            Ok(request) => request,
            Err(err) => {
                error_msg.set(Some(err.user_message(MSG_LOGIN_FAILED)));
                return;
            }
        };

        loading.set(true);
        let api = session.api_client();
        match client::api::auth::login(&api, &request).await {
            Ok(signed_in) => {
                session.sign_in(signed_in);
                navigator().push(Route::Home {});
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                error_msg.set(Some(err.user_message(MSG_LOGIN_FAILED)));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Masuk",
                description: "Masuk dengan email, nomor telepon, atau nama lengkap",

                if let Some(err) = error_msg() {
                    Alert { tone: AlertTone::Error, "{err}" }
                }

                form { onsubmit: handle_login,
                    FormField {
                        id: "identifier",
                        label: "Email / No. Telepon / Nama Lengkap",
                        value: identifier(),
                        required: true,
                        disabled: loading(),
                        on_input: move |v: String| identifier.set(v),
                    }
                    FormField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        required: true,
                        disabled: loading(),
                        on_input: move |v: String| password.set(v),
                    }
                    Button {
                        button_type: "submit",
                        class: "auth-submit",
                        loading: loading(),
                        loading_label: "Memproses...",
                        "Masuk"
                    }
                }

                p { class: "auth-link",
                    "Belum punya akun? "
                    Link { to: Route::Register {}, "Daftar di sini" }
                }
            }
        }
    }
}
