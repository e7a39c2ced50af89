//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    customer_orders::CustomerOrdersPage, customer_services::CustomerServicesPage,
    dispatch::{OrderDispatch, ServicesDispatch},
    home::HomePage, login::LoginPage,
    provider_dashboard::ProviderDashboardPage, provider_orders::ProviderOrdersPage,
    provider_services::ProviderServicesPage, register::RegisterPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth store and sets up client-side routing. Unknown
/// paths fall through to a silent redirect home; role-based guards live on
/// the individual pages via `util::guard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/myclean.css"/>
        <Title text="MyClean"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("services") view=ServicesDispatch/>
                    <Route path=StaticSegment("order") view=OrderDispatch/>
                    <Route
                        path=(StaticSegment("provider"), StaticSegment("dashboard"))
                        view=ProviderDashboardPage
                    />
                    <Route
                        path=(StaticSegment("provider"), StaticSegment("services"))
                        view=ProviderServicesPage
                    />
                    <Route
                        path=(StaticSegment("provider"), StaticSegment("orders"))
                        view=ProviderOrdersPage
                    />
                    <Route
                        path=(StaticSegment("customer"), StaticSegment("services"))
                        view=CustomerServicesPage
                    />
                    <Route
                        path=(StaticSegment("customer"), StaticSegment("orders"))
                        view=CustomerOrdersPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
