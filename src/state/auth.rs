//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared as an `RwSignal<AuthState>` via context, provided once in `App`.
//! Route guards and user-aware components read the derived flags; the
//! `session` module owns the mutations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the current user plus call-progress bookkeeping.
///
/// `loading` is true only while a login/register call is in flight; `error`
/// is cleared at the start of every attempt and on explicit clear.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Start a login/register attempt: mark loading, drop any stale error.
    pub fn begin_attempt(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Successful attempt: the response user replaces the old one entirely.
    pub fn finish_login(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Failed attempt: record the message, keep whatever user was set.
    pub fn finish_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Adopt a rehydrated user without touching loading or error.
    pub fn adopt(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Log out: user and error unset. Cannot fail.
    pub fn clear_session(&mut self) {
        self.user = None;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// A user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// A user is signed in and holds the provider role.
    pub fn is_provider(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_provider)
    }

    /// A user is signed in and does not hold the provider role.
    ///
    /// The upstream UI computed this as plain "not provider", which made it
    /// true for a signed-out visitor; here it requires authentication.
    pub fn is_customer(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.is_provider)
    }

    /// Name shown in the nav bar: "first last" (trimmed) when a first name
    /// exists, else the email, else empty when signed out.
    pub fn display_name(&self) -> String {
        let Some(user) = &self.user else {
            return String::new();
        };
        match &user.first_name {
            Some(first) => format!("{} {}", first, user.last_name.as_deref().unwrap_or(""))
                .trim()
                .to_owned(),
            None => user.email.clone(),
        }
    }
}
