//! Top navigation bar with role-aware links and the logout action.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session;

/// Navigation bar. Links follow the signed-in role; logout clears the
/// session and lets the active page's guard redirect away.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        session::logout(auth);
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">
                "MyClean"
            </a>
            <div class="nav-bar__links">
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a href="/login">"Log in"</a>
                            <a href="/register">"Register"</a>
                        }
                    }
                >
                    <Show
                        when=move || auth.with(AuthState::is_provider)
                        fallback=|| {
                            view! {
                                <a href="/customer/services">"Services"</a>
                                <a href="/customer/orders">"My Orders"</a>
                            }
                        }
                    >
                        <a href="/provider/dashboard">"Dashboard"</a>
                        <a href="/provider/services">"My Services"</a>
                        <a href="/provider/orders">"Orders"</a>
                    </Show>
                    <span class="nav-bar__user">{move || auth.with(AuthState::display_name)}</span>
                    <button class="nav-bar__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
