use client::ApiClient;
use dioxus::prelude::*;
use shared_types::Session;

/// The signed-in user of this tab, shared through context.
///
/// Single writer: only `sign_in` and `logout` change it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    /// Pick up a session persisted by an earlier visit.
    pub fn restore() -> Self {
        let restored = client::storage::load_session();
        if let Some(session) = &restored {
            tracing::info!(user_id = %session.user_id, "session restored");
        }
        Self {
            current: Signal::new(restored),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn sign_in(&mut self, session: Session) {
        client::storage::save_session(&session);
        self.current.set(Some(session));
    }

    /// Drop the session and its stored copy. Calling it again is a no-op.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.peek().as_ref() {
            tracing::info!(user_id = %session.user_id, "signed out");
        }
        client::storage::clear_session();
        self.current.set(None);
    }

    /// API client carrying the current bearer token, if any.
    ///
    /// Reads without subscribing so resources built from it do not rerun
    /// when the session changes.
    pub fn api_client(&self) -> ApiClient {
        let client = ApiClient::from_env();
        match self.current.peek().as_ref() {
            Some(session) => client.with_token(session.auth_token.clone()),
            None => client,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
