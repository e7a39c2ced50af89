//! Registration page with the optional profile fields.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::guard::install_route_guard;

/// Map an optional form field to its wire value: trimmed, empty becomes
/// absent rather than an empty string.
fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Assemble the registration payload, or reject when the required fields
/// are missing.
fn build_register_request(
    email: &str,
    password: &str,
    phone: &str,
    first_name: &str,
    last_name: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.");
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        phone: optional_field(phone),
        first_name: optional_field(first_name),
        last_name: optional_field(last_name),
    })
}

/// Registration page. Guest-only, same redirect behavior as login.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::Register, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = build_register_request(
            &email.get(),
            &password.get(),
            &phone.get(),
            &first_name.get(),
            &last_name.get(),
        );
        match request {
            Err(message) => form_error.set(Some(message)),
            Ok(request) => {
                form_error.set(None);
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let _ = crate::state::session::register(auth, &request).await;
                    busy.set(false);
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = request;
                    busy.set(false);
                }
            }
        }
    };

    let text_input = move |signal: RwSignal<String>, kind: &'static str, hint: &'static str| {
        view! {
            <input
                class="register-input"
                type=kind
                placeholder=hint
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create an account"</h1>
                <form class="register-form" on:submit=on_submit>
                    {text_input(email, "email", "you@example.com")}
                    {text_input(password, "password", "Password")}
                    {text_input(phone, "tel", "Phone (optional)")}
                    {text_input(first_name, "text", "First name (optional)")}
                    {text_input(last_name, "text", "Last name (optional)")}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || form_error.get().is_some()>
                    <p class="register-message">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || auth.with(|s| s.error.is_some())>
                    <p class="register-message register-message--error">
                        {move || auth.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </div>
        </div>
    }
}
