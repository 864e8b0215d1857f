use crate::error::AppError;
use crate::session::Role;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Delay between a successful registration and the redirect to `/login`.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const MSG_PASSWORD_TOO_SHORT: &str = "Password harus minimal 6 karakter";
pub const MSG_PASSWORD_MISMATCH: &str = "Password dan konfirmasi password tidak cocok";
pub const MSG_NAME_REQUIRED: &str = "Nama lengkap harus diisi";
pub const MSG_REGISTER_SUCCESS: &str = "Registrasi berhasil! Silakan login dengan akun Anda.";
pub const MSG_REGISTER_FAILED: &str = "Terjadi kesalahan saat registrasi. Periksa koneksi Anda.";

/// Editable fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    FullName,
    Email,
    Phone,
    Password,
    PasswordConfirmation,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 5] = [
        RegistrationField::FullName,
        RegistrationField::Email,
        RegistrationField::Phone,
        RegistrationField::Password,
        RegistrationField::PasswordConfirmation,
    ];

    /// Wire key, also used as the DOM id and in `AppError::field_errors`.
    pub fn key(&self) -> &'static str {
        match self {
            RegistrationField::FullName => "nama_lengkap",
            RegistrationField::Email => "email",
            RegistrationField::Phone => "no_telp",
            RegistrationField::Password => "password",
            RegistrationField::PasswordConfirmation => "confirm_password",
        }
    }
}

/// Unsubmitted form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationDraft {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FullName => &self.full_name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Password => &self.password,
            RegistrationField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::FullName => &mut self.full_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Password => &mut self.password,
            RegistrationField::PasswordConfirmation => &mut self.password_confirmation,
        };
        *slot = value;
    }

    /// Check the draft in order: password length, confirmation, name.
    /// The first failing rule wins.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(
                RegistrationField::Password.key(),
                MSG_PASSWORD_TOO_SHORT,
            ));
        }
        if self.password != self.password_confirmation {
            return Err(AppError::validation(
                RegistrationField::PasswordConfirmation.key(),
                MSG_PASSWORD_MISMATCH,
            ));
        }
        if self.full_name.trim().is_empty() {
            return Err(AppError::validation(
                RegistrationField::FullName.key(),
                MSG_NAME_REQUIRED,
            ));
        }
        Ok(())
    }

    /// Validate and map to the wire request.
    pub fn to_request(&self) -> Result<RegisterRequest, AppError> {
        self.validate()?;
        let email = self.email.trim();
        Ok(RegisterRequest {
            nama_lengkap: self.full_name.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
            no_telp: self.phone.trim().to_string(),
            password: self.password.clone(),
            role: Role::Wali,
        })
    }
}

/// Body of `POST /api/register`.
///
/// `email` serializes as `null` when absent. Self-registration always
/// creates a guardian account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nama_lengkap: String,
    pub email: Option<String>,
    pub no_telp: String,
    pub password: String,
    pub role: Role,
}

/// Lifecycle of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// One request in flight; inputs locked.
    Submitting,
    /// Registered; waiting out the redirect delay.
    SuccessSettling,
}

/// Registration form controller.
///
/// Owns the draft and the banners. It never performs I/O: `begin_submit`
/// hands out the request to send and `complete` takes the outcome back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    draft: RegistrationDraft,
    phase: FormPhase,
    error: Option<String>,
    success: Option<String>,
    redirect_scheduled: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Inputs and the submit control are disabled while a request is in flight.
    pub fn is_locked(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Apply a keystroke. Clears both banners. Ignored while submitting.
    pub fn set_field(&mut self, field: RegistrationField, value: String) -> bool {
        if self.is_locked() {
            return false;
        }
        self.draft.set(field, value);
        self.error = None;
        self.success = None;
        self.phase = FormPhase::Editing;
        true
    }

    /// Start a submission.
    ///
    /// Returns the request to send, or `None` when the form is not editable
    /// or the draft fails validation (the error banner is set in that case).
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.phase != FormPhase::Editing {
            return None;
        }
        self.error = None;
        self.success = None;
        match self.draft.to_request() {
            Ok(request) => {
                self.phase = FormPhase::Submitting;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.user_message(MSG_REGISTER_FAILED));
                None
            }
        }
    }

    /// Record the outcome of the request started by `begin_submit`.
    ///
    /// On the first success returns the delay after which the caller
    /// navigates to `/login`. Returns `None` on failure, when nothing was in
    /// flight, or when a redirect is already pending from an earlier success.
    pub fn complete(&mut self, result: Result<(), AppError>) -> Option<Duration> {
        if self.phase != FormPhase::Submitting {
            return None;
        }
        match result {
            Ok(()) => {
                self.draft = RegistrationDraft::default();
                self.success = Some(MSG_REGISTER_SUCCESS.to_string());
                self.phase = FormPhase::SuccessSettling;
                if self.redirect_scheduled {
                    return None;
                }
                self.redirect_scheduled = true;
                Some(SUCCESS_REDIRECT_DELAY)
            }
            Err(err) => {
                self.error = Some(err.user_message(MSG_REGISTER_FAILED));
                self.phase = FormPhase::Editing;
                None
            }
        }
    }
}
