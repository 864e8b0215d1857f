use crate::http::ApiClient;
use shared_types::{AppError, RegisterRequest};

pub const REGISTER_PATH: &str = "/api/register";

/// Create a guardian account via `POST /api/register`.
///
/// The success body is only logged. Non-2xx responses become
/// `RequestFailure` carrying the server's `error` text.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<(), AppError> {
    match client
        .post_json::<_, serde_json::Value>(REGISTER_PATH, request)
        .await
    {
        Ok(body) => {
            tracing::info!(response = %body, "registration accepted");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "registration failed");
            Err(err)
        }
    }
}
