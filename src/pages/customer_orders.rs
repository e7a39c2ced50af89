//! Customer orders page: the signed-in customer's order history.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::format;
use crate::util::guard::install_route_guard;

/// Customer orders page at `/customer/orders`.
#[component]
pub fn CustomerOrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::CustomerOrders, use_navigate());

    let orders = LocalResource::new(|| async {
        crate::net::api::fetch_orders(None).await.unwrap_or_default()
    });

    view! {
        <div class="orders-page">
            <header class="orders-page__header">
                <h1>"My Orders"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="orders-page__empty">
                                        "No orders yet. "
                                        <a href="/customer/services">"Browse services"</a>
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="orders-page__list">
                                        {list
                                            .into_iter()
                                            .map(|order| {
                                                view! {
                                                    <li class="order-row">
                                                        <span class="order-row__number">{order.order_number}</span>
                                                        <span class="order-row__service">
                                                            {order.service_type_name}
                                                        </span>
                                                        <span class="order-row__when">
                                                            {format!(
                                                                "{} {}",
                                                                order.service_date,
                                                                format::time_range(
                                                                    &order.service_time_start,
                                                                    &order.service_time_end,
                                                                ),
                                                            )}
                                                        </span>
                                                        <span class="order-row__price">
                                                            {format::price(order.total_price)}
                                                        </span>
                                                        <span class="order-row__status">
                                                            {format::status_label(&order.status).to_owned()}
                                                        </span>
                                                    </li>
                                                }
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
