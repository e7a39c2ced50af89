//! Store actions: the async half of the auth store.
//!
//! DESIGN
//! ======
//! Each action mutates the shared `RwSignal<AuthState>` through the pure
//! transitions in `auth` and keeps the persisted record in step. Failures
//! propagate to the caller after being recorded in `error`, so forms can
//! both display the store error and react to the returned `Result`.
//!
//! There is deliberately no mutual exclusion around overlapping login or
//! register calls: the last resolution wins, matching the upstream UI.
//! Pages debounce double submits with a busy flag instead.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::api;
use crate::net::types::{RegisterRequest, User};
use crate::state::auth::AuthState;
use crate::util::storage;

const LOGIN_FAILED: &str = "Login failed";
const REGISTER_FAILED: &str = "Registration failed";

/// Error message recorded in the store: the failure's own message, or the
/// fixed default when the failure carries none.
fn failure_message(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Log in and persist the resulting user.
///
/// Sets `loading` for the duration of the call, clears any stale `error`,
/// and always clears `loading` on completion regardless of outcome.
///
/// # Errors
///
/// Propagates the API failure after recording it in the store's `error`.
pub async fn login(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<User, String> {
    auth.update(AuthState::begin_attempt);
    match api::login(email, password).await {
        Ok(user) => {
            storage::persist_user(&user);
            auth.update(|state| state.finish_login(user.clone()));
            Ok(user)
        }
        Err(err) => {
            let message = failure_message(&err, LOGIN_FAILED);
            auth.update(|state| state.finish_failure(message.clone()));
            Err(message)
        }
    }
}

/// Create an account and persist the resulting user.
///
/// Identical contract to [`login`], against the registration endpoint.
///
/// # Errors
///
/// Propagates the API failure after recording it in the store's `error`.
pub async fn register(
    auth: RwSignal<AuthState>,
    request: &RegisterRequest,
) -> Result<User, String> {
    auth.update(AuthState::begin_attempt);
    match api::register(request).await {
        Ok(user) => {
            storage::persist_user(&user);
            auth.update(|state| state.finish_login(user.clone()));
            Ok(user)
        }
        Err(err) => {
            let message = failure_message(&err, REGISTER_FAILED);
            auth.update(|state| state.finish_failure(message.clone()));
            Err(message)
        }
    }
}

/// Log out: clear the in-memory session and remove the persisted record.
/// Synchronous and infallible.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(AuthState::clear_session);
    storage::clear_user();
}

/// Rehydrate the store from the persisted record, if any.
///
/// Idempotent: does nothing once a user is set. A present but unparseable
/// record is discarded with a logged warning; no failure surfaces.
pub fn initialize_auth(auth: RwSignal<AuthState>) {
    if auth.with_untracked(|state| state.user.is_some()) {
        return;
    }
    let Some(raw) = storage::read_user() else {
        return;
    };
    match storage::decode_user(&raw) {
        Some(user) => auth.update(|state| state.adopt(user)),
        None => {
            #[cfg(feature = "hydrate")]
            log::warn!("discarding unparseable persisted user record");
            storage::clear_user();
        }
    }
}

/// Clear the store's error without touching the session.
pub fn clear_error(auth: RwSignal<AuthState>) {
    auth.update(AuthState::clear_error);
}
