use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppError, ClientConfig};

/// JSON-over-HTTP access to the TPQ API.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Client for the globally configured origin.
    pub fn from_env() -> Self {
        Self::new(crate::config::config().clone())
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.config.url(path);
        tracing::debug!(%url, "GET");
        self.send(self.http.get(url), path).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        tracing::debug!(%url, "POST");
        self.send(self.http.post(url).json(body), path).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, AppError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| AppError::transport(format!("{path}: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(format!("{path}: reading body: {e}")))?;

        if !status.is_success() {
            return Err(AppError::from_response(status.as_u16(), &body));
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::transport(format!("{path}: invalid JSON: {e}")))
    }
}
