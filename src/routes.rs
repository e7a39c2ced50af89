//! Route model and navigation-guard resolution.
//!
//! DESIGN
//! ======
//! Routes are a closed enum so guard logic stays DOM-free and natively
//! testable. `resolve` applies the access rules in a fixed order and the
//! first matching rule wins; dispatch routes (`/services`, `/order`) are
//! resolved before the generic chain since they never render a view.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Application routes, one variant per addressable screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Public landing page at `/`.
    Home,
    /// Guest-only login form.
    Login,
    /// Guest-only registration form.
    Register,
    /// Role dispatcher for `/services`; never renders a view.
    Services,
    /// Role dispatcher for `/order`; never renders a view.
    Order,
    ProviderDashboard,
    ProviderServices,
    ProviderOrders,
    CustomerServices,
    CustomerOrders,
}

/// Outcome of evaluating the navigation guard for a target route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Navigation proceeds to the requested route.
    Allow,
    /// Navigation is rerouted; the blocked route never loads.
    Redirect(AppRoute),
}

impl AppRoute {
    /// Parse a URL path into a route. Unknown paths yield `None`; the
    /// caller treats that as a silent redirect to [`AppRoute::Home`].
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/services" => Some(Self::Services),
            "/order" => Some(Self::Order),
            "/provider/dashboard" => Some(Self::ProviderDashboard),
            "/provider/services" => Some(Self::ProviderServices),
            "/provider/orders" => Some(Self::ProviderOrders),
            "/customer/services" => Some(Self::CustomerServices),
            "/customer/orders" => Some(Self::CustomerOrders),
            _ => None,
        }
    }

    /// URL path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Services => "/services",
            Self::Order => "/order",
            Self::ProviderDashboard => "/provider/dashboard",
            Self::ProviderServices => "/provider/services",
            Self::ProviderOrders => "/provider/orders",
            Self::CustomerServices => "/customer/services",
            Self::CustomerOrders => "/customer/orders",
        }
    }

    /// Whether the route is reachable only with a signed-in user.
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::ProviderDashboard
                | Self::ProviderServices
                | Self::ProviderOrders
                | Self::CustomerServices
                | Self::CustomerOrders
        )
    }

    /// Whether the route is reachable only without a signed-in user.
    pub fn requires_guest(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Whether the route is restricted to the provider role.
    pub fn requires_provider(self) -> bool {
        matches!(
            self,
            Self::ProviderDashboard | Self::ProviderServices | Self::ProviderOrders
        )
    }

    /// Whether the route is restricted to the customer role.
    pub fn requires_customer(self) -> bool {
        matches!(self, Self::CustomerServices | Self::CustomerOrders)
    }
}

/// Role-specific target for the dispatch routes, `None` for real views.
fn dispatch_target(route: AppRoute, is_authenticated: bool, is_provider: bool) -> Option<AppRoute> {
    match route {
        AppRoute::Services => Some(if !is_authenticated {
            AppRoute::Login
        } else if is_provider {
            AppRoute::ProviderServices
        } else {
            AppRoute::CustomerServices
        }),
        AppRoute::Order => Some(if !is_authenticated {
            AppRoute::Login
        } else if is_provider {
            AppRoute::ProviderOrders
        } else {
            AppRoute::CustomerOrders
        }),
        _ => None,
    }
}

/// Evaluate the navigation guard for `route` against the current auth flags.
///
/// Rule order is fixed: dispatch, auth, guest, provider role, customer role.
pub fn resolve(route: AppRoute, is_authenticated: bool, is_provider: bool) -> Resolution {
    if let Some(target) = dispatch_target(route, is_authenticated, is_provider) {
        return Resolution::Redirect(target);
    }
    if route.requires_auth() && !is_authenticated {
        return Resolution::Redirect(AppRoute::Login);
    }
    if route.requires_guest() && is_authenticated {
        return Resolution::Redirect(if is_provider {
            AppRoute::ProviderDashboard
        } else {
            AppRoute::CustomerServices
        });
    }
    if route.requires_provider() && !is_provider {
        return Resolution::Redirect(AppRoute::CustomerServices);
    }
    if route.requires_customer() && is_provider {
        return Resolution::Redirect(AppRoute::ProviderDashboard);
    }
    Resolution::Allow
}

/// Evaluate the guard for a raw URL path; unknown paths redirect home.
pub fn resolve_path(path: &str, is_authenticated: bool, is_provider: bool) -> Resolution {
    match AppRoute::from_path(path) {
        Some(route) => resolve(route, is_authenticated, is_provider),
        None => Resolution::Redirect(AppRoute::Home),
    }
}
