//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session;

/// Landing page at `/`, open to everyone; the call to action follows the
/// visitor's auth state.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Pick up a persisted session so the call to action matches the role
    // even on a cold load of the landing page.
    session::initialize_auth(auth);

    view! {
        <div class="home-page">
            <h1>"MyClean"</h1>
            <p>"Book trusted cleaning services, or offer your own."</p>
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=|| {
                    view! {
                        <div class="home-page__actions">
                            <a href="/login" class="btn btn--primary">
                                "Log in"
                            </a>
                            <a href="/register" class="btn">
                                "Create an account"
                            </a>
                        </div>
                    }
                }
            >
                <div class="home-page__actions">
                    <a href="/services" class="btn btn--primary">
                        "Browse services"
                    </a>
                    <a href="/order" class="btn">
                        "Your orders"
                    </a>
                </div>
            </Show>
        </div>
    }
}
