//! Customer services page: browse active services and book one.

#[cfg(test)]
#[path = "customer_services_test.rs"]
mod customer_services_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::service_card::ServiceCard;
use crate::net::types::{OrderCreate, ServiceDuration, ServiceType};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::format;
use crate::util::guard::install_route_guard;

/// Price of a duration variant: base price times the variant multiplier.
fn duration_price(base_price: f64, multiplier: f64) -> f64 {
    base_price * multiplier
}

/// Assemble the booking payload from the dialog state.
fn build_order_create(
    service_type_id: i64,
    duration: Option<i64>,
    date: &str,
    time_start: &str,
    notes: &str,
) -> Result<OrderCreate, &'static str> {
    let Some(service_duration_id) = duration else {
        return Err("Pick a duration.");
    };
    let date = date.trim();
    let time_start = time_start.trim();
    if date.is_empty() || time_start.is_empty() {
        return Err("Pick a date and a start time.");
    }
    let notes = notes.trim();
    Ok(OrderCreate {
        service_type_id,
        service_duration_id,
        service_date: date.to_owned(),
        service_time_start: time_start.to_owned(),
        customer_notes: (!notes.is_empty()).then(|| notes.to_owned()),
    })
}

/// Customer services page at `/customer/services`.
#[component]
pub fn CustomerServicesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::CustomerServices, use_navigate());

    let services = LocalResource::new(|| async {
        crate::net::api::fetch_services(false).await.unwrap_or_default()
    });

    // Service currently being booked, if any.
    let booking = RwSignal::new(None::<ServiceType>);
    let on_close = Callback::new(move |()| booking.set(None));

    view! {
        <div class="services-page">
            <header class="services-page__header">
                <h1>"Services"</h1>
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
                                            let for_dialog = service.clone();
                                            view! {
                                                <ServiceCard service=service>
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| booking.set(Some(for_dialog.clone()))
                                                    >
                                                        "Book"
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

            {move || {
                booking
                    .get()
                    .map(|service| view! { <BookServiceDialog service=service on_close=on_close/> })
            }}
        </div>
    }
}

/// Booking dialog: pick a duration variant, date, and start time.
#[component]
fn BookServiceDialog(service: ServiceType, on_close: Callback<()>) -> impl IntoView {
    let service_id = service.id;
    let base_price = service.base_price;

    let durations = LocalResource::new(move || async move {
        crate::net::api::fetch_service_durations(service_id)
            .await
            .unwrap_or_default()
    });

    let selected_duration = RwSignal::new(None::<i64>);
    let date = RwSignal::new(String::new());
    let time_start = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let navigate = use_navigate();
    let submit = Callback::new(move |()| {
        let request = build_order_create(
            service_id,
            selected_duration.get(),
            &date.get(),
            &time_start.get(),
            &notes.get(),
        );
        match request {
            Err(message) => form_error.set(Some(message)),
            Ok(request) => {
                form_error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        if crate::net::api::create_order(&request).await.is_ok() {
                            navigate(
                                crate::routes::AppRoute::CustomerOrders.path(),
                                leptos_router::NavigateOptions::default(),
                            );
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (request, &navigate);
                }
            }
        }
    });

    let duration_option = move |duration: &ServiceDuration| {
        let id = duration.id;
        let label = format!(
            "{} ({})",
            duration.duration_label,
            format::price(duration_price(base_price, duration.price_multiplier)),
        );
        let checked = move || selected_duration.get() == Some(id);
        view! {
            <label class="dialog__choice">
                <input
                    type="radio"
                    name="duration"
                    prop:checked=checked
                    on:change=move |_| selected_duration.set(Some(id))
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Book {}", service.name)}</h2>

                <Suspense fallback=move || view! { <p>"Loading durations..."</p> }>
                    {move || {
                        durations
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="dialog__choices">
                                        {list.iter().map(duration_option).collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>

                <input
                    class="dialog__input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="time"
                    prop:value=move || time_start.get()
                    on:input=move |ev| time_start.set(event_target_value(&ev))
                />
                <textarea
                    class="dialog__input"
                    placeholder="Notes for the provider (optional)"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>

                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Book"
                    </button>
                </div>
            </div>
        </div>
    }
}
