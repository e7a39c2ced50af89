//! Role dispatchers for `/services` and `/order`.
//!
//! These routes have no view of their own: the guard resolution always
//! produces a redirect (login when signed out, otherwise the role-specific
//! services or orders screen).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::guard::install_route_guard;

/// `/services`: reroute to the role-specific services screen.
#[component]
pub fn ServicesDispatch() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::Services, use_navigate());
    view! { <div class="dispatch"></div> }
}

/// `/order`: reroute to the role-specific orders screen.
#[component]
pub fn OrderDispatch() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::Order, use_navigate());
    view! { <div class="dispatch"></div> }
}
