use shared_types::{ClientConfig, API_URL_ENV};
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Resolve the API origin and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
///
/// Precedence: `TPQ_API_URL` baked in at build time, then (native targets
/// only) `TPQ_API_URL` from the process environment or `.env`, then the
/// local development origin.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = ClientConfig::with_base_url(resolve_override().as_deref());
        tracing::info!(api_base_url = %config.api_base_url, "client config loaded");
        config
    })
}

/// The loaded config, loading it on first use.
pub fn config() -> &'static ClientConfig {
    load_config()
}

fn resolve_override() -> Option<String> {
    if let Some(url) = option_env!("TPQ_API_URL") {
        return Some(url.to_string());
    }
    runtime_override()
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    let _ = API_URL_ENV;
    None
}
