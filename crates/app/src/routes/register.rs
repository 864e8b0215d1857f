use dioxus::prelude::*;
use shared_types::{RegistrationField, RegistrationForm};
use shared_ui::{Alert, AlertTone, Button, Card, FormField};

use crate::routes::Route;

struct FieldMeta {
    field: RegistrationField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
    hint: &'static str,
}

const FIELDS: &[FieldMeta] = &[
    FieldMeta {
        field: RegistrationField::FullName,
        label: "Nama Lengkap",
        input_type: "text",
        placeholder: "Nama lengkap wali santri",
        required: true,
        hint: "",
    },
    FieldMeta {
        field: RegistrationField::Email,
        label: "Email",
        input_type: "email",
        placeholder: "nama@email.com",
        required: false,
        hint: "Opsional",
    },
    FieldMeta {
        field: RegistrationField::Phone,
        label: "Nomor Telepon",
        input_type: "tel",
        placeholder: "08xxxxxxxxxx",
        required: true,
        hint: "",
    },
    FieldMeta {
        field: RegistrationField::Password,
        label: "Password",
        input_type: "password",
        placeholder: "Minimal 6 karakter",
        required: true,
        hint: "",
    },
    FieldMeta {
        field: RegistrationField::PasswordConfirmation,
        label: "Konfirmasi Password",
        input_type: "password",
        placeholder: "Ulangi password",
        required: true,
        hint: "",
    },
];

/// Registration is anonymous: the request never carries a session token.
fn registration_client() -> client::ApiClient {
    client::ApiClient::from_env()
}

/// Guardian self-registration.
///
/// After a successful registration the page waits out the settle delay
/// and moves to `/login`. The wait runs on this component's scope, so
/// leaving the page first cancels it.
#[component]
pub fn Register() -> Element {
    let mut registration = use_signal(RegistrationForm::new);
    let nav = navigator();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = registration.write().begin_submit() else {
            return;
        };
        let api = registration_client();
        spawn(async move {
            let result = client::api::register::register(&api, &request).await;
            let redirect = registration.write().complete(result);
            if let Some(delay) = redirect {
                client::timer::after(delay, move || {
                    nav.push(Route::Login {});
                })
                .await;
            }
        });
    };

    let state = registration.read().clone();
    let locked = state.is_locked();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Daftar Akun Wali Santri",
                description: "Buat akun untuk memantau perkembangan santri",

                if let Some(err) = state.error() {
                    Alert { tone: AlertTone::Error, "{err}" }
                }
                if let Some(ok) = state.success() {
                    Alert { tone: AlertTone::Success, "{ok}" }
                }

                form { onsubmit: handle_register,
                    for entry in FIELDS {
                        FormField {
                            key: "{entry.label}",
                            id: entry.field.key(),
                            label: entry.label,
                            input_type: entry.input_type,
                            placeholder: entry.placeholder,
                            hint: entry.hint,
                            value: state.draft().get(entry.field).to_string(),
                            required: entry.required,
                            disabled: locked,
                            on_input: move |v: String| {
                                registration.write().set_field(entry.field, v);
                            },
                        }
                    }
                    Button {
                        button_type: "submit",
                        class: "auth-submit",
                        loading: locked,
                        loading_label: "Mendaftar...",
                        "Daftar"
                    }
                }

                p { class: "auth-link",
                    "Sudah punya akun? "
                    Link { to: Route::Login {}, "Masuk di sini" }
                }
            }
        }
    }
}
