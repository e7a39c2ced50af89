//! Provider dashboard: greeting plus an order-book snapshot.

#[cfg(test)]
#[path = "provider_dashboard_test.rs"]
mod provider_dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Order;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::guard::install_route_guard;

/// Order-book counters shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct OrderStats {
    open: usize,
    in_progress: usize,
    completed: usize,
}

impl OrderStats {
    /// Tally orders by lifecycle bucket: `pending`/`confirmed` count as
    /// open work, cancelled orders are ignored.
    fn tally(orders: &[Order]) -> Self {
        let mut stats = Self::default();
        for order in orders {
            match order.status.as_str() {
                "pending" | "confirmed" => stats.open += 1,
                "in_progress" => stats.in_progress += 1,
                "completed" => stats.completed += 1,
                _ => {}
            }
        }
        stats
    }
}

/// Provider dashboard page at `/provider/dashboard`.
#[component]
pub fn ProviderDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, AppRoute::ProviderDashboard, use_navigate());

    let orders = LocalResource::new(|| async {
        crate::net::api::fetch_orders(None).await.unwrap_or_default()
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", auth.with(AuthState::display_name))}</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            let stats = OrderStats::tally(&list);
                            view! {
                                <div class="dashboard-page__stats">
                                    <div class="stat-card">
                                        <span class="stat-card__value">{stats.open}</span>
                                        <span class="stat-card__label">"Open"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{stats.in_progress}</span>
                                        <span class="stat-card__label">"In progress"</span>
                                    </div>
                                    <div class="stat-card">
                                        <span class="stat-card__value">{stats.completed}</span>
                                        <span class="stat-card__label">"Completed"</span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Suspense>

            <div class="dashboard-page__links">
                <a href="/provider/services" class="btn">
                    "Manage services"
                </a>
                <a href="/provider/orders" class="btn">
                    "Manage orders"
                </a>
            </div>
        </div>
    }
}
