use serde::{Deserialize, Serialize};

/// Origin used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Name of the environment variable that overrides the API origin.
pub const API_URL_ENV: &str = "TPQ_API_URL";

/// Client configuration. Every field has a default so a missing
/// override still yields a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Build from an optional override. Blank overrides are ignored and
    /// trailing slashes are trimmed so paths can be appended directly.
    pub fn with_base_url(base: Option<&str>) -> Self {
        let api_base_url = base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(|b| b.trim_end_matches('/').to_string())
            .unwrap_or_else(default_base_url);
        Self { api_base_url }
    }

    /// Absolute URL for an API path such as `/api/register`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}
