use axum::{http::HeaderMap, http::StatusCode, Json, Router};
use client::ApiClient;
use serde_json::{json, Value};
use shared_types::ClientConfig;
use std::sync::{Arc, Mutex};

/// Serve `router` on an ephemeral local port and return its origin.
/// The server lives until the test runtime shuts down.
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("mock api address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock api server");
    });
    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig::with_base_url(Some(base_url)))
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    client_for(&format!("http://{addr}"))
}

pub fn total(n: u64) -> Json<Value> {
    Json(json!({ "total": n }))
}

pub fn server_error(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

/// Shared log of `Authorization` headers seen by handlers.
#[derive(Clone, Default)]
pub struct SeenAuth(Arc<Mutex<Vec<Option<String>>>>);

impl SeenAuth {
    pub fn record(&self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.0.lock().expect("auth log").push(value);
    }

    pub fn all(&self) -> Vec<Option<String>> {
        self.0.lock().expect("auth log").clone()
    }
}

/// Shared slot for the last JSON body a handler received.
#[derive(Clone, Default)]
pub struct SeenBody(Arc<Mutex<Option<Value>>>);

impl SeenBody {
    pub fn record(&self, body: Value) {
        *self.0.lock().expect("body slot") = Some(body);
    }

    pub fn last(&self) -> Option<Value> {
        self.0.lock().expect("body slot").clone()
    }
}
