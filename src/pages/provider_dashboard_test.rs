use super::*;

fn order(status: &str) -> Order {
    Order {
        id: 1,
        order_number: "XXX123".to_owned(),
        customer_name: "John Doe".to_owned(),
        service_date: "2025-10-05".to_owned(),
        service_time_start: "11:00:00".to_owned(),
        service_time_end: "12:00:00".to_owned(),
        total_price: 21.0,
        status: status.to_owned(),
        service_type_name: "Deep Clean".to_owned(),
    }
}

#[test]
fn tally_buckets_statuses() {
    let orders = [
        order("pending"),
        order("confirmed"),
        order("in_progress"),
        order("completed"),
        order("completed"),
    ];
    let stats = OrderStats::tally(&orders);
    assert_eq!(stats.open, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 2);
}

#[test]
fn tally_ignores_cancelled_and_unknown_statuses() {
    let orders = [order("cancelled"), order("on_hold")];
    assert_eq!(OrderStats::tally(&orders), OrderStats::default());
}

#[test]
fn tally_of_empty_list_is_zero() {
    assert_eq!(OrderStats::tally(&[]), OrderStats::default());
}
