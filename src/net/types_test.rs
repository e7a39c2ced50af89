use super::*;

// =============================================================
// Optional-field absence
// =============================================================

#[test]
fn user_deserializes_without_optional_fields() {
    let json = r#"{"id":1,"email":"a@x.com","is_provider":false}"#;
    let user: User = serde_json::from_str(json).expect("minimal user should parse");
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "a@x.com");
    assert!(user.phone.is_none());
    assert!(user.first_name.is_none());
    assert!(user.last_name.is_none());
    assert!(!user.is_provider);
}

#[test]
fn service_type_deserializes_without_optional_fields() {
    let json = r#"{
        "id": 3,
        "name": "Deep Clean",
        "base_price": 25.0,
        "category_name": "Cleaning",
        "is_active": true
    }"#;
    let service: ServiceType = serde_json::from_str(json).expect("minimal service should parse");
    assert!(service.description.is_none());
    assert!(service.duration_minutes.is_none());
    assert!(service.provider_name.is_none());
    assert!(service.rating.is_none());
    assert!(service.reviews_count.is_none());
    assert!(service.image_url.is_none());
}

// =============================================================
// Request-body serialization
// =============================================================

#[test]
fn order_create_omits_absent_notes() {
    let body = OrderCreate {
        service_type_id: 1,
        service_duration_id: 2,
        service_date: "2025-10-07".to_owned(),
        service_time_start: "10:00".to_owned(),
        customer_notes: None,
    };
    let json = serde_json::to_string(&body).expect("serialize");
    assert!(!json.contains("customer_notes"));

    let with_notes = OrderCreate {
        customer_notes: Some("Gift wrapping requested".to_owned()),
        ..body
    };
    let json = serde_json::to_string(&with_notes).expect("serialize");
    assert!(json.contains("customer_notes"));
}

#[test]
fn register_request_omits_absent_optionals() {
    let body = RegisterRequest {
        email: "a@x.com".to_owned(),
        password: "pw".to_owned(),
        phone: None,
        first_name: Some("Ann".to_owned()),
        last_name: None,
    };
    let json = serde_json::to_string(&body).expect("serialize");
    assert!(!json.contains("phone"));
    assert!(!json.contains("last_name"));
    assert!(json.contains("first_name"));
}

#[test]
fn service_update_serializes_only_set_fields() {
    let body = ServiceUpdate {
        is_active: Some(false),
        ..ServiceUpdate::default()
    };
    let json = serde_json::to_string(&body).expect("serialize");
    assert_eq!(json, r#"{"is_active":false}"#);
}

#[test]
fn empty_service_update_is_an_empty_object() {
    let json = serde_json::to_string(&ServiceUpdate::default()).expect("serialize");
    assert_eq!(json, "{}");
}
