use super::*;

// =============================================================
// Path parsing
// =============================================================

#[test]
fn from_path_maps_known_routes() {
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::from_path("/register"), Some(AppRoute::Register));
    assert_eq!(AppRoute::from_path("/services"), Some(AppRoute::Services));
    assert_eq!(AppRoute::from_path("/order"), Some(AppRoute::Order));
    assert_eq!(
        AppRoute::from_path("/provider/dashboard"),
        Some(AppRoute::ProviderDashboard)
    );
    assert_eq!(
        AppRoute::from_path("/customer/orders"),
        Some(AppRoute::CustomerOrders)
    );
}

#[test]
fn from_path_tolerates_trailing_slash() {
    assert_eq!(AppRoute::from_path("/login/"), Some(AppRoute::Login));
    assert_eq!(
        AppRoute::from_path("/provider/services/"),
        Some(AppRoute::ProviderServices)
    );
}

#[test]
fn from_path_rejects_unknown_paths() {
    assert_eq!(AppRoute::from_path("/admin"), None);
    assert_eq!(AppRoute::from_path("/provider"), None);
    assert_eq!(AppRoute::from_path("/services/extra"), None);
}

#[test]
fn path_round_trips_for_real_views() {
    for route in [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::ProviderDashboard,
        AppRoute::ProviderServices,
        AppRoute::ProviderOrders,
        AppRoute::CustomerServices,
        AppRoute::CustomerOrders,
    ] {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

// =============================================================
// Access flags
// =============================================================

#[test]
fn provider_routes_require_auth_and_provider_role() {
    for route in [
        AppRoute::ProviderDashboard,
        AppRoute::ProviderServices,
        AppRoute::ProviderOrders,
    ] {
        assert!(route.requires_auth());
        assert!(route.requires_provider());
        assert!(!route.requires_customer());
        assert!(!route.requires_guest());
    }
}

#[test]
fn customer_routes_require_auth_and_customer_role() {
    for route in [AppRoute::CustomerServices, AppRoute::CustomerOrders] {
        assert!(route.requires_auth());
        assert!(route.requires_customer());
        assert!(!route.requires_provider());
    }
}

#[test]
fn login_and_register_are_guest_only() {
    assert!(AppRoute::Login.requires_guest());
    assert!(AppRoute::Register.requires_guest());
    assert!(!AppRoute::Login.requires_auth());
}

#[test]
fn home_is_unrestricted() {
    assert!(!AppRoute::Home.requires_auth());
    assert!(!AppRoute::Home.requires_guest());
    assert!(!AppRoute::Home.requires_provider());
    assert!(!AppRoute::Home.requires_customer());
}

// =============================================================
// Guard resolution
// =============================================================

#[test]
fn auth_required_routes_redirect_unauthenticated_to_login() {
    for route in [
        AppRoute::ProviderDashboard,
        AppRoute::ProviderServices,
        AppRoute::ProviderOrders,
        AppRoute::CustomerServices,
        AppRoute::CustomerOrders,
    ] {
        assert_eq!(
            resolve(route, false, false),
            Resolution::Redirect(AppRoute::Login)
        );
    }
}

#[test]
fn guest_routes_redirect_authenticated_by_role() {
    assert_eq!(
        resolve(AppRoute::Login, true, true),
        Resolution::Redirect(AppRoute::ProviderDashboard)
    );
    assert_eq!(
        resolve(AppRoute::Login, true, false),
        Resolution::Redirect(AppRoute::CustomerServices)
    );
    assert_eq!(
        resolve(AppRoute::Register, true, true),
        Resolution::Redirect(AppRoute::ProviderDashboard)
    );
    assert_eq!(
        resolve(AppRoute::Register, true, false),
        Resolution::Redirect(AppRoute::CustomerServices)
    );
}

#[test]
fn guest_routes_allow_unauthenticated() {
    assert_eq!(resolve(AppRoute::Login, false, false), Resolution::Allow);
    assert_eq!(resolve(AppRoute::Register, false, false), Resolution::Allow);
}

#[test]
fn provider_routes_redirect_customers_to_customer_services() {
    for route in [
        AppRoute::ProviderDashboard,
        AppRoute::ProviderServices,
        AppRoute::ProviderOrders,
    ] {
        assert_eq!(
            resolve(route, true, false),
            Resolution::Redirect(AppRoute::CustomerServices)
        );
    }
}

#[test]
fn customer_routes_redirect_providers_to_dashboard() {
    for route in [AppRoute::CustomerServices, AppRoute::CustomerOrders] {
        assert_eq!(
            resolve(route, true, true),
            Resolution::Redirect(AppRoute::ProviderDashboard)
        );
    }
}

#[test]
fn matching_role_is_allowed_through() {
    assert_eq!(
        resolve(AppRoute::ProviderServices, true, true),
        Resolution::Allow
    );
    assert_eq!(
        resolve(AppRoute::CustomerOrders, true, false),
        Resolution::Allow
    );
    assert_eq!(resolve(AppRoute::Home, true, true), Resolution::Allow);
    assert_eq!(resolve(AppRoute::Home, false, false), Resolution::Allow);
}

// =============================================================
// Dispatch routes
// =============================================================

#[test]
fn services_dispatch_follows_role() {
    assert_eq!(
        resolve(AppRoute::Services, false, false),
        Resolution::Redirect(AppRoute::Login)
    );
    assert_eq!(
        resolve(AppRoute::Services, true, true),
        Resolution::Redirect(AppRoute::ProviderServices)
    );
    assert_eq!(
        resolve(AppRoute::Services, true, false),
        Resolution::Redirect(AppRoute::CustomerServices)
    );
}

#[test]
fn order_dispatch_follows_role() {
    assert_eq!(
        resolve(AppRoute::Order, false, false),
        Resolution::Redirect(AppRoute::Login)
    );
    assert_eq!(
        resolve(AppRoute::Order, true, true),
        Resolution::Redirect(AppRoute::ProviderOrders)
    );
    assert_eq!(
        resolve(AppRoute::Order, true, false),
        Resolution::Redirect(AppRoute::CustomerOrders)
    );
}

// =============================================================
// Path-level resolution
// =============================================================

#[test]
fn unknown_paths_redirect_home() {
    assert_eq!(
        resolve_path("/does-not-exist", false, false),
        Resolution::Redirect(AppRoute::Home)
    );
    assert_eq!(
        resolve_path("/does-not-exist", true, true),
        Resolution::Redirect(AppRoute::Home)
    );
}

#[test]
fn resolve_path_applies_guard_to_known_paths() {
    assert_eq!(
        resolve_path("/services", true, true),
        Resolution::Redirect(AppRoute::ProviderServices)
    );
    assert_eq!(
        resolve_path("/provider/orders", false, false),
        Resolution::Redirect(AppRoute::Login)
    );
}
