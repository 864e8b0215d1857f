use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client-side failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Rejected locally before any network call.
    ValidationError,
    /// The API answered with a non-2xx status.
    RequestFailure,
    /// No usable response: connection, decode, or body errors.
    TransportFailure,
    /// A member of a concurrent fan-out failed.
    AggregationFailure,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::RequestFailure => write!(f, "RequestFailure"),
            AppErrorKind::TransportFailure => write!(f, "TransportFailure"),
            AppErrorKind::AggregationFailure => write!(f, "AggregationFailure"),
        }
    }
}

/// Structured error shared by the data-access layer and the views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status for `RequestFailure`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl AppError {
    /// A local validation failure tied to one form field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.into(), message.clone());
        Self {
            kind: AppErrorKind::ValidationError,
            message,
            status: None,
            field_errors,
        }
    }

    /// A non-2xx response. `message` is empty when the server sent no `error` text.
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::RequestFailure,
            message: message.into(),
            status: Some(status),
            field_errors: HashMap::new(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::TransportFailure,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn aggregation(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::AggregationFailure,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    /// Build a `RequestFailure` from a status code and the raw response body.
    ///
    /// The server's `error` field is kept verbatim; a body that is not the
    /// expected JSON shape yields an empty message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_default();
        Self::request(status, message)
    }

    /// Message to show an end user.
    ///
    /// Validation errors and server-provided request errors are shown as-is.
    /// Everything else, including transport exception text, collapses to
    /// `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.kind {
            AppErrorKind::ValidationError | AppErrorKind::RequestFailure
                if !self.message.is_empty() =>
            {
                self.message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}
