use super::*;

#[test]
fn price_renders_two_decimals() {
    assert_eq!(price(21.0), "$21.00");
    assert_eq!(price(37.5), "$37.50");
    assert_eq!(price(0.0), "$0.00");
}

#[test]
fn status_label_maps_known_statuses() {
    assert_eq!(status_label("pending"), "Pending");
    assert_eq!(status_label("in_progress"), "In progress");
    assert_eq!(status_label("cancelled"), "Cancelled");
}

#[test]
fn status_label_passes_through_unknown_statuses() {
    assert_eq!(status_label("on_hold"), "on_hold");
}

#[test]
fn time_range_trims_backend_seconds() {
    assert_eq!(time_range("11:00:00", "12:00:00"), "11:00 - 12:00");
}

#[test]
fn time_range_leaves_short_times_alone() {
    assert_eq!(time_range("11:00", "12:00"), "11:00 - 12:00");
}
