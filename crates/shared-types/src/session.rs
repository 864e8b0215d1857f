use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an authenticated user.
///
/// The API speaks three roles; any other string is carried through
/// unchanged so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    Admin,
    Wali,
    Other(String),
}

impl Role {
    /// Parse the wire value. Unknown values are preserved verbatim.
    pub fn parse(s: &str) -> Self {
        match s {
            "super_admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "wali" => Role::Wali,
            other => Role::Other(other.to_string()),
        }
    }

    /// Wire value, as stored by the API.
    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Wali => "wali",
            Role::Other(raw) => raw,
        }
    }

    /// Human-readable label for headers and badges.
    pub fn label(&self) -> &str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Wali => "Wali Santri",
            Role::Other(raw) => raw,
        }
    }
}

/// Label for a raw role string, passing unmapped values through.
pub fn role_label(raw: &str) -> String {
    Role::parse(raw).label().to_string()
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user of this tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
    pub auth_token: String,
}

impl Session {
    pub fn new(user: LoginUser, auth_token: impl Into<String>) -> Self {
        Self {
            user_id: user.id_user,
            display_name: user.nama_lengkap,
            role: user.role,
            auth_token: auth_token.into(),
        }
    }

    /// The user record as persisted in browser storage under `user`.
    pub fn stored_user(&self) -> LoginUser {
        LoginUser {
            id_user: self.user_id.clone(),
            nama_lengkap: self.display_name.clone(),
            email: None,
            no_telp: None,
            role: self.role.clone(),
        }
    }
}

/// User record inside a login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id_user: String,
    pub nama_lengkap: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_telp: Option<String>,
    pub role: Role,
}

/// Body of `POST /api/login`. Exactly one identifier field is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_lengkap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_telp: Option<String>,
    pub password: String,
}

impl LoginRequest {
    /// Route a free-form identifier to the matching lookup field:
    /// `@` means email, digits (optionally with a leading `+`) mean phone,
    /// anything else is a full name.
    pub fn from_identifier(identifier: &str, password: impl Into<String>) -> Self {
        let id = identifier.trim().to_string();
        let digits = id.strip_prefix('+').unwrap_or(&id);
        let mut req = LoginRequest {
            password: password.into(),
            ..Default::default()
        };
        if id.contains('@') {
            req.email = Some(id);
        } else if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            req.no_telp = Some(id);
        } else {
            req.nama_lengkap = Some(id);
        }
        req
    }
}

/// Successful `POST /api/login` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: LoginUser,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Session::new(resp.user, resp.token)
    }
}
