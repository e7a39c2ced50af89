//! Login page with email + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::guard::install_route_guard;

/// Trim the email and require both fields before hitting the network.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page. Guest-only: the guard sends signed-in users to their
/// role's screen, which is also what redirects after a successful login.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::Login, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Err(message) => form_error.set(Some(message)),
            Ok((email_value, password_value)) => {
                form_error.set(None);
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    // The guard redirects by role once the store adopts the
                    // user; a failure stays here with the store error shown.
                    let _ = crate::state::session::login(auth, &email_value, &password_value).await;
                    busy.set(false);
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (email_value, password_value);
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || form_error.get().is_some()>
                    <p class="login-message">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || auth.with(|s| s.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || auth.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </div>
        </div>
    }
}
