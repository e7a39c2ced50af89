use super::*;

#[test]
fn build_register_request_requires_email_and_password() {
    assert_eq!(
        build_register_request("", "pw", "", "", ""),
        Err("Email and password are required.")
    );
    assert_eq!(
        build_register_request("a@x.com", "", "", "", ""),
        Err("Email and password are required.")
    );
}

#[test]
fn build_register_request_omits_empty_optional_fields() {
    let request =
        build_register_request("a@x.com", "pw", "", "  ", "").expect("required fields present");
    assert!(request.phone.is_none());
    assert!(request.first_name.is_none());
    assert!(request.last_name.is_none());
}

#[test]
fn build_register_request_trims_populated_fields() {
    let request = build_register_request(" a@x.com ", "pw", " 1234567890 ", " John ", " Doe ")
        .expect("required fields present");
    assert_eq!(request.email, "a@x.com");
    assert_eq!(request.phone.as_deref(), Some("1234567890"));
    assert_eq!(request.first_name.as_deref(), Some("John"));
    assert_eq!(request.last_name.as_deref(), Some("Doe"));
}

#[test]
fn optional_field_maps_whitespace_to_absent() {
    assert_eq!(optional_field("   "), None);
    assert_eq!(optional_field(" x "), Some("x".to_owned()));
}
