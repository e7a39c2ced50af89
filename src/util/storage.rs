//! Persisted user record in `localStorage`.
//!
//! One record under a fixed key holds the serde_json-encoded current user so
//! a page reload keeps the session. Browser access requires the `hydrate`
//! feature; the encode/decode halves are pure so the round-trip is covered
//! by native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::User;

/// Fixed `localStorage` key for the persisted user.
pub const USER_STORAGE_KEY: &str = "myclean_user";

/// Serialize a user for persistence.
pub fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Parse a persisted record; `None` for corrupt or foreign content.
pub fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Read the raw persisted record, if one exists.
pub fn read_user() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(USER_STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write the user record, replacing any previous one.
pub fn persist_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(json) = encode_user(user) {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(USER_STORAGE_KEY, &json);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the persisted record, if any.
pub fn clear_user() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(USER_STORAGE_KEY);
            }
        }
    }
}
