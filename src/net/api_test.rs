use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn services_endpoint_attaches_filter_only_when_requested() {
    assert_eq!(services_endpoint(false), "/api/services");
    assert_eq!(services_endpoint(true), "/api/services?include_inactive=true");
}

#[test]
fn service_endpoints_format_expected_paths() {
    assert_eq!(service_endpoint(7), "/api/services/7");
    assert_eq!(service_durations_endpoint(7), "/api/services/7/durations");
}

#[test]
fn orders_endpoint_attaches_status_only_when_supplied() {
    assert_eq!(orders_endpoint(None), "/api/orders");
    assert_eq!(orders_endpoint(Some("pending")), "/api/orders?status=pending");
}

#[test]
fn order_endpoints_format_expected_paths() {
    assert_eq!(order_endpoint(42), "/api/orders/42");
    assert_eq!(
        order_status_endpoint(42, "confirmed"),
        "/api/orders/42/status?status=confirmed"
    );
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn status_error_formats_operation_and_status() {
    assert_eq!(status_error("login", 401), "login failed: 401");
    assert_eq!(status_error("fetch orders", 500), "fetch orders failed: 500");
}
