//! REST API functions, one per backend endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native/SSR builds
//! get inert stubs since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function performs exactly one network call and propagates transport
//! or non-2xx failures unmodified as `Err(String)`: no retry, no caching,
//! no timeout override. Query parameters are attached only when the optional
//! filter is supplied.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Order, OrderCreate, OrderStatusUpdated, RegisterRequest, ServiceCreate, ServiceDuration,
    ServiceType, ServiceUpdate, ServiceUpdated, User,
};

#[cfg(not(feature = "hydrate"))]
const NOT_IN_BROWSER: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn services_endpoint(include_inactive: bool) -> String {
    if include_inactive {
        "/api/services?include_inactive=true".to_owned()
    } else {
        "/api/services".to_owned()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn service_endpoint(service_id: i64) -> String {
    format!("/api/services/{service_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn service_durations_endpoint(service_id: i64) -> String {
    format!("/api/services/{service_id}/durations")
}

#[cfg(any(test, feature = "hydrate"))]
fn orders_endpoint(status: Option<&str>) -> String {
    match status {
        Some(status) => format!("/api/orders?status={status}"),
        None => "/api/orders".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn order_endpoint(order_id: i64) -> String {
    format!("/api/orders/{order_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn order_status_endpoint(order_id: i64, status: &str) -> String {
    format!("/api/orders/{order_id}/status?status={status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("login", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn register(request: &RegisterRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("register", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// List services via `GET /api/services`, optionally including inactive ones.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn fetch_services(include_inactive: bool) -> Result<Vec<ServiceType>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&services_endpoint(include_inactive))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("fetch services", resp.status()));
        }
        resp.json::<Vec<ServiceType>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = include_inactive;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// List duration variants via `GET /api/services/{id}/durations`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn fetch_service_durations(service_id: i64) -> Result<Vec<ServiceDuration>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&service_durations_endpoint(service_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("fetch durations", resp.status()));
        }
        resp.json::<Vec<ServiceDuration>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service_id;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Create a service via `POST /api/services`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn create_service(request: &ServiceCreate) -> Result<ServiceType, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/services")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("create service", resp.status()));
        }
        resp.json::<ServiceType>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Partially update a service via `PUT /api/services/{id}`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn update_service(
    service_id: i64,
    request: &ServiceUpdate,
) -> Result<ServiceUpdated, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&service_endpoint(service_id))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("update service", resp.status()));
        }
        resp.json::<ServiceUpdated>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service_id, request);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Place an order via `POST /api/orders`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn create_order(request: &OrderCreate) -> Result<Order, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/orders")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("create order", resp.status()));
        }
        resp.json::<Order>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// List orders via `GET /api/orders`, optionally filtered by status.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn fetch_orders(status: Option<String>) -> Result<Vec<Order>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&orders_endpoint(status.as_deref()))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("fetch orders", resp.status()));
        }
        resp.json::<Vec<Order>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = status;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Fetch a single order via `GET /api/orders/{id}`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn fetch_order(order_id: i64) -> Result<Order, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&order_endpoint(order_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("fetch order", resp.status()));
        }
        resp.json::<Order>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = order_id;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Move an order to a new status via `PUT /api/orders/{id}/status`.
///
/// # Errors
///
/// Returns the transport error or the non-2xx status message.
pub async fn update_order_status(
    order_id: i64,
    status: &str,
) -> Result<OrderStatusUpdated, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&order_status_endpoint(order_id, status))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error("update order status", resp.status()));
        }
        resp.json::<OrderStatusUpdated>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (order_id, status);
        Err(NOT_IN_BROWSER.to_owned())
    }
}
