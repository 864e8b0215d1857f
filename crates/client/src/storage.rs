//! Browser persistence for the signed-in session.
//!
//! The token and the user record live under separate `localStorage` keys.
//! Off the web there is no storage and every call is a no-op.

use shared_types::{LoginUser, Session};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Rebuild a session from the raw stored values. Both keys must be present
/// and the user record must parse.
pub fn decode_session(token: Option<String>, user: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let user: LoginUser = serde_json::from_str(&user?).ok()?;
    Some(Session::new(user, token))
}

/// Serialized user record for `USER_KEY`.
pub fn encode_user(session: &Session) -> Option<String> {
    serde_json::to_string(&session.stored_user()).ok()
}

/// Log a failed storage write. Returns whether it succeeded.
pub fn check_write<E: std::fmt::Debug>(op: &'static str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(op, key, error = ?err, "localStorage write failed");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Session persisted by a previous visit, if any.
pub fn load_session() -> Option<Session> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user = storage.get_item(USER_KEY).ok().flatten();
        decode_session(token, user)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn save_session(session: &Session) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        let Some(user) = encode_user(session) else {
            tracing::warn!("user record did not serialize, session not persisted");
            return;
        };
        check_write("set", TOKEN_KEY, storage.set_item(TOKEN_KEY, &session.auth_token));
        check_write("set", USER_KEY, storage.set_item(USER_KEY, &user));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = session;
    }
}

pub fn clear_session() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            check_write("remove", TOKEN_KEY, storage.remove_item(TOKEN_KEY));
            check_write("remove", USER_KEY, storage.remove_item(USER_KEY));
        }
    }
}
