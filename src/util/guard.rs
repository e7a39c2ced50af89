//! Wiring of guard resolution into `leptos_router`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page installs the same behavior: rehydrate the auth store
//! once, then keep the current route consistent with the guard rules as the
//! auth state changes (login and logout both retrigger the effect).

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{AppRoute, Resolution, resolve};
use crate::state::auth::AuthState;
use crate::state::session;

/// Options for guard redirects: replace the blocked entry instead of
/// pushing it onto the history stack.
fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Install the navigation guard for `route`.
///
/// Rehydrates the store from persistent storage first (idempotent), then
/// evaluates the guard in an effect so a later auth change (logout on a
/// protected page, login on a guest page) redirects automatically.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, route: AppRoute, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    session::initialize_auth(auth);
    Effect::new(move || {
        let state = auth.get();
        if let Resolution::Redirect(target) =
            resolve(route, state.is_authenticated(), state.is_provider())
        {
            navigate(target.path(), redirect_options());
        }
    });
}
