use super::*;

// =============================================================
// Booking payload
// =============================================================

#[test]
fn build_order_create_requires_a_duration() {
    assert_eq!(
        build_order_create(1, None, "2025-10-07", "10:00", ""),
        Err("Pick a duration.")
    );
}

#[test]
fn build_order_create_requires_date_and_time() {
    assert_eq!(
        build_order_create(1, Some(2), "", "10:00", ""),
        Err("Pick a date and a start time.")
    );
    assert_eq!(
        build_order_create(1, Some(2), "2025-10-07", "  ", ""),
        Err("Pick a date and a start time.")
    );
}

#[test]
fn build_order_create_assembles_payload() {
    let order = build_order_create(1, Some(2), "2025-10-07", "10:00", " Ring the bell. ")
        .expect("valid input");
    assert_eq!(order.service_type_id, 1);
    assert_eq!(order.service_duration_id, 2);
    assert_eq!(order.service_date, "2025-10-07");
    assert_eq!(order.service_time_start, "10:00");
    assert_eq!(order.customer_notes.as_deref(), Some("Ring the bell."));
}

#[test]
fn build_order_create_omits_empty_notes() {
    let order =
        build_order_create(1, Some(2), "2025-10-07", "10:00", "   ").expect("valid input");
    assert!(order.customer_notes.is_none());
}

// =============================================================
// Duration pricing
// =============================================================

#[test]
fn duration_price_applies_multiplier() {
    assert!((duration_price(25.0, 1.5) - 37.5).abs() < f64::EPSILON);
    assert!((duration_price(21.0, 1.0) - 21.0).abs() < f64::EPSILON);
}
