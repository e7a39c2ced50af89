//! Provider order management: list, filter by status, advance or cancel.

#[cfg(test)]
#[path = "provider_orders_test.rs"]
mod provider_orders_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Order;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::format;
use crate::util::guard::install_route_guard;

/// Statuses offered by the filter dropdown, in lifecycle order.
const FILTERABLE_STATUSES: [&str; 5] =
    ["pending", "confirmed", "in_progress", "completed", "cancelled"];

/// The forward transition for an order, `None` once terminal.
fn next_status(status: &str) -> Option<&'static str> {
    match status {
        "pending" => Some("confirmed"),
        "confirmed" => Some("in_progress"),
        "in_progress" => Some("completed"),
        _ => None,
    }
}

/// Cancellation is only offered before work starts.
fn can_cancel(status: &str) -> bool {
    matches!(status, "pending" | "confirmed")
}

/// Provider orders page at `/provider/orders`.
#[component]
pub fn ProviderOrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::ProviderOrders, use_navigate());

    // Resource refetches whenever the filter changes.
    let filter = RwSignal::new(None::<String>);
    let orders = LocalResource::new(move || {
        let status = filter.get();
        async move { crate::net::api::fetch_orders(status).await.unwrap_or_default() }
    });

    let set_status = move |order_id: i64, status: &'static str| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::update_order_status(order_id, status)
                    .await
                    .is_ok()
                {
                    orders.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (order_id, status);
        }
    };

    view! {
        <div class="orders-page">
            <header class="orders-page__header">
                <h1>"Orders"</h1>
                <select
                    class="orders-page__filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.set(if value.is_empty() { None } else { Some(value) });
                    }
                >
                    <option value="">"All statuses"</option>
                    {FILTERABLE_STATUSES
                        .into_iter()
                        .map(|s| view! { <option value=s>{format::status_label(s)}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="orders-page__empty">"No orders."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="orders-page__list">
                                        {list
                                            .into_iter()
                                            .map(|order| {
                                                view! { <ProviderOrderRow order=order set_status=set_status/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One order row with its available transitions.
#[component]
fn ProviderOrderRow(
    order: Order,
    set_status: impl Fn(i64, &'static str) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let order_id = order.id;
    let advance = next_status(&order.status);
    let cancellable = can_cancel(&order.status);

    view! {
        <li class="order-row">
            <span class="order-row__number">{order.order_number}</span>
            <span class="order-row__customer">{order.customer_name}</span>
            <span class="order-row__service">{order.service_type_name}</span>
            <span class="order-row__when">
                {format!(
                    "{} {}",
                    order.service_date,
                    format::time_range(&order.service_time_start, &order.service_time_end),
                )}
            </span>
            <span class="order-row__price">{format::price(order.total_price)}</span>
            <span class="order-row__status">{format::status_label(&order.status).to_owned()}</span>
            {advance
                .map(|status| {
                    view! {
                        <button class="btn btn--primary" on:click=move |_| set_status(order_id, status)>
                            {format::status_label(status).to_owned()}
                        </button>
                    }
                })}
            <Show when=move || cancellable>
                <button class="btn btn--danger" on:click=move |_| set_status(order_id, "cancelled")>
                    "Cancel"
                </button>
            </Show>
        </li>
    }
}
