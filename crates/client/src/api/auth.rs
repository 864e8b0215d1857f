use crate::http::ApiClient;
use shared_types::{AppError, LoginRequest, LoginResponse, Session};

pub const LOGIN_PATH: &str = "/api/login";

/// Exchange credentials for a `Session` via `POST /api/login`.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Session, AppError> {
    let response: LoginResponse = client.post_json(LOGIN_PATH, request).await?;
    let session = Session::from(response);
    tracing::info!(user_id = %session.user_id, role = %session.role, "signed in");
    Ok(session)
}
