//! Display formatting for prices, statuses, and time ranges.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a price with currency symbol and two decimals.
pub fn price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Human-readable label for a backend order status.
pub fn status_label(status: &str) -> &str {
    match status {
        "pending" => "Pending",
        "confirmed" => "Confirmed",
        "in_progress" => "In progress",
        "completed" => "Completed",
        "cancelled" => "Cancelled",
        other => other,
    }
}

/// Render a start/end time pair, trimming backend seconds (`HH:MM:SS`).
pub fn time_range(start: &str, end: &str) -> String {
    format!("{} - {}", trim_seconds(start), trim_seconds(end))
}

fn trim_seconds(time: &str) -> &str {
    if time.len() == 8 && time.as_bytes()[5] == b':' {
        &time[..5]
    } else {
        time
    }
}
