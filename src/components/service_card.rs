//! Card presentation of a single service.

use leptos::prelude::*;

use crate::net::types::ServiceType;
use crate::util::format;

/// Service card: name, category, price, and whatever optional detail the
/// record carries. `children` hosts the page-specific actions (book, edit).
#[component]
pub fn ServiceCard(service: ServiceType, children: Children) -> impl IntoView {
    let rating = service
        .rating
        .map(|r| format!("{r:.1} ({} reviews)", service.reviews_count.unwrap_or(0)));

    view! {
        <div class="service-card" class=("service-card--inactive", !service.is_active)>
            <div class="service-card__header">
                <h3>{service.name}</h3>
                <span class="service-card__price">{format::price(service.base_price)}</span>
            </div>
            <p class="service-card__category">{service.category_name}</p>
            {service
                .description
                .map(|d| view! { <p class="service-card__description">{d}</p> })}
            {service
                .provider_name
                .map(|p| view! { <p class="service-card__provider">{"by "}{p}</p> })}
            {rating.map(|r| view! { <p class="service-card__rating">{r}</p> })}
            <div class="service-card__actions">{children()}</div>
        </div>
    }
}
