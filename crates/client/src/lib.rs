//! Data access for the TPQ dashboards: configuration, the HTTP client, the
//! external API endpoints, timers, and browser session storage.

pub mod api;
pub mod config;
pub mod http;
pub mod storage;
pub mod timer;

pub use http::ApiClient;
