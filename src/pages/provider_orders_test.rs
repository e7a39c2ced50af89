use super::*;

// =============================================================
// Status transitions
// =============================================================

#[test]
fn next_status_walks_the_lifecycle_forward() {
    assert_eq!(next_status("pending"), Some("confirmed"));
    assert_eq!(next_status("confirmed"), Some("in_progress"));
    assert_eq!(next_status("in_progress"), Some("completed"));
}

#[test]
fn terminal_statuses_have_no_next() {
    assert_eq!(next_status("completed"), None);
    assert_eq!(next_status("cancelled"), None);
    assert_eq!(next_status("unknown"), None);
}

#[test]
fn cancellation_only_before_work_starts() {
    assert!(can_cancel("pending"));
    assert!(can_cancel("confirmed"));
    assert!(!can_cancel("in_progress"));
    assert!(!can_cancel("completed"));
    assert!(!can_cancel("cancelled"));
}

#[test]
fn filterable_statuses_cover_the_lifecycle() {
    assert_eq!(FILTERABLE_STATUSES.len(), 5);
    for status in FILTERABLE_STATUSES {
        // Every filter option has a display label.
        assert_ne!(crate::util::format::status_label(status), status);
    }
}
