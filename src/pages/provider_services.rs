//! Provider service management: list (inactive included), create, toggle.

#[cfg(test)]
#[path = "provider_services_test.rs"]
mod provider_services_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::service_card::ServiceCard;
use crate::net::types::{ServiceCreate, ServiceUpdate};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::guard::install_route_guard;

/// Assemble the create-service payload from raw form strings.
fn build_service_create(
    name: &str,
    category: &str,
    base_price: &str,
    description: &str,
    duration_minutes: &str,
) -> Result<ServiceCreate, &'static str> {
    let name = name.trim();
    let category = category.trim();
    if name.is_empty() || category.is_empty() {
        return Err("Name and category are required.");
    }
    let Ok(base_price) = base_price.trim().parse::<f64>() else {
        return Err("Enter a valid base price.");
    };
    if base_price < 0.0 {
        return Err("Enter a valid base price.");
    }
    let duration_minutes = match duration_minutes.trim() {
        "" => None,
        raw => match raw.parse::<i32>() {
            Ok(minutes) if minutes > 0 => Some(minutes),
            _ => return Err("Enter a valid duration in minutes."),
        },
    };
    let description = description.trim();
    Ok(ServiceCreate {
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        category_name: category.to_owned(),
        base_price,
        duration_minutes,
        is_active: None,
    })
}

/// Provider services page at `/provider/services`.
#[component]
pub fn ProviderServicesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::ProviderServices, use_navigate());

    // Providers see their inactive services too.
    let services = LocalResource::new(|| async {
        crate::net::api::fetch_services(true).await.unwrap_or_default()
    });

    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    let toggle_active = move |service_id: i64, currently_active: bool| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let update = ServiceUpdate {
                    is_active: Some(!currently_active),
                    ..ServiceUpdate::default()
                };
                if crate::net::api::update_service(service_id, &update).await.is_ok() {
                    services.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (service_id, currently_active);
        }
    };

    view! {
        <div class="services-page">
            <header class="services-page__header">
                <h1>"My Services"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Service"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|list| {
                            view! {
                                <div class="services-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|service| {
                                            let id = service.id;
                                            let active = service.is_active;
                                            view! {
                                                <ServiceCard service=service>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| toggle_active(id, active)
                                                    >
                                                        {if active { "Deactivate" } else { "Activate" }}
                                                    </button>
                                                </ServiceCard>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateServiceDialog on_cancel=on_cancel services=services/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new service.
#[component]
fn CreateServiceDialog(
    on_cancel: Callback<()>,
    services: LocalResource<Vec<crate::net::types::ServiceType>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let base_price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        let request = build_service_create(
            &name.get(),
            &category.get(),
            &base_price.get(),
            &description.get(),
            &duration.get(),
        );
        match request {
            Err(message) => form_error.set(Some(message)),
            Ok(request) => {
                form_error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    leptos::task::spawn_local(async move {
                        if crate::net::api::create_service(&request).await.is_ok() {
                            services.refetch();
                            on_cancel.run(());
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (request, &services);
                }
            }
        }
    });

    let field = move |signal: RwSignal<String>, hint: &'static str| {
        view! {
            <input
                class="dialog__input"
                type="text"
                placeholder=hint
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Service"</h2>
                {field(name, "Name")}
                {field(category, "Category")}
                {field(base_price, "Base price")}
                {field(duration, "Duration in minutes (optional)")}
                {field(description, "Description (optional)")}
                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
