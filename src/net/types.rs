//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response models field for field so serde
//! round-trips stay lossless. The client performs no validation or
//! transformation beyond field presence; optional fields deserialize to
//! `None` when absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the login/register endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login email, also the fallback display name.
    pub email: String,
    /// Contact phone number, if provided at registration.
    pub phone: Option<String>,
    /// Given name, if provided at registration.
    pub first_name: Option<String>,
    /// Family name, if provided at registration.
    pub last_name: Option<String>,
    /// Whether this account offers services (provider role) rather than
    /// purchasing them (customer role).
    pub is_provider: bool,
}

/// A bookable service as listed under `/api/services`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    /// Unique service identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Longer marketing description, if set.
    pub description: Option<String>,
    /// Price for the base duration.
    pub base_price: f64,
    /// Base duration in minutes, if the service is time-boxed.
    pub duration_minutes: Option<i32>,
    /// Category the service is filed under.
    pub category_name: String,
    /// Whether the service is currently offered; inactive services are
    /// hidden from customers but listed for their provider.
    pub is_active: bool,
    /// Display name of the offering provider, if known.
    pub provider_name: Option<String>,
    /// Average review rating, if any reviews exist.
    pub rating: Option<f64>,
    /// Number of reviews behind `rating`.
    pub reviews_count: Option<i32>,
    /// Illustration URL, if set.
    pub image_url: Option<String>,
}

/// A selectable duration variant for a service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceDuration {
    /// Unique duration identifier.
    pub id: i64,
    /// Service this duration belongs to.
    pub service_type_id: i64,
    /// Length in minutes.
    pub duration_minutes: i32,
    /// Human-readable label (e.g. `"2 hours"`).
    pub duration_label: String,
    /// Multiplier applied to the service base price.
    pub price_multiplier: f64,
}

/// An order as returned by the `/api/orders` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: i64,
    /// Human-facing order reference (e.g. `"XXX123"`).
    pub order_number: String,
    /// Display name of the ordering customer.
    pub customer_name: String,
    /// Scheduled service date (`YYYY-MM-DD`).
    pub service_date: String,
    /// Scheduled start time (`HH:MM:SS`).
    pub service_time_start: String,
    /// Scheduled end time (`HH:MM:SS`).
    pub service_time_end: String,
    /// Final price after the duration multiplier.
    pub total_price: f64,
    /// Lifecycle status: `pending`, `confirmed`, `in_progress`,
    /// `completed`, or `cancelled`.
    pub status: String,
    /// Display name of the ordered service.
    pub service_type_name: String,
}

/// Request body for `POST /api/orders`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    /// Service being booked.
    pub service_type_id: i64,
    /// Chosen duration variant.
    pub service_duration_id: i64,
    /// Requested service date (`YYYY-MM-DD`).
    pub service_date: String,
    /// Requested start time (`HH:MM`).
    pub service_time_start: String,
    /// Free-form instructions for the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,
}

/// Request body for `POST /api/auth/register`. Optional fields are omitted
/// from the payload entirely when unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Request body for `POST /api/services`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_name: String,
    pub base_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Partial-update body for `PUT /api/services/{id}`. Only set fields are
/// serialized, so unset fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Acknowledgement for `PUT /api/services/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceUpdated {
    pub message: String,
    pub service_id: i64,
}

/// Acknowledgement for `PUT /api/orders/{id}/status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdated {
    pub message: String,
    pub order_id: i64,
    pub new_status: String,
}
