pub mod auth;
pub mod guardian;
pub mod register;
pub mod stats;

use shared_types::AppError;
use std::future::Future;

/// Await a dashboard load and degrade to `T::default()` on failure.
///
/// Failures are logged for diagnostics only; dashboards never show them
/// as an error banner.
pub async fn or_default<T, F>(what: &'static str, load: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, AppError>>,
{
    match load.await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "{what} unavailable, showing defaults");
            T::default()
        }
    }
}

/// Tag a fan-out member's failure with the endpoint it came from.
pub(crate) fn member_failed(path: &str, err: AppError) -> AppError {
    AppError::aggregation(format!("{path}: {err}"))
}
