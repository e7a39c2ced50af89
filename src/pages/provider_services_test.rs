use super::*;

#[test]
fn build_service_create_requires_name_and_category() {
    assert_eq!(
        build_service_create("", "Cleaning", "25", "", ""),
        Err("Name and category are required.")
    );
    assert_eq!(
        build_service_create("Deep Clean", "  ", "25", "", ""),
        Err("Name and category are required.")
    );
}

#[test]
fn build_service_create_parses_price() {
    let service =
        build_service_create("Deep Clean", "Cleaning", "25.50", "", "").expect("valid input");
    assert!((service.base_price - 25.5).abs() < f64::EPSILON);
}

#[test]
fn build_service_create_rejects_bad_prices() {
    assert_eq!(
        build_service_create("Deep Clean", "Cleaning", "abc", "", ""),
        Err("Enter a valid base price.")
    );
    assert_eq!(
        build_service_create("Deep Clean", "Cleaning", "-5", "", ""),
        Err("Enter a valid base price.")
    );
}

#[test]
fn build_service_create_duration_is_optional() {
    let service =
        build_service_create("Deep Clean", "Cleaning", "25", "", "").expect("valid input");
    assert!(service.duration_minutes.is_none());

    let service =
        build_service_create("Deep Clean", "Cleaning", "25", "", "90").expect("valid input");
    assert_eq!(service.duration_minutes, Some(90));
}

#[test]
fn build_service_create_rejects_bad_durations() {
    assert_eq!(
        build_service_create("Deep Clean", "Cleaning", "25", "", "0"),
        Err("Enter a valid duration in minutes.")
    );
    assert_eq!(
        build_service_create("Deep Clean", "Cleaning", "25", "", "soon"),
        Err("Enter a valid duration in minutes.")
    );
}

#[test]
fn build_service_create_maps_empty_description_to_absent() {
    let service =
        build_service_create("Deep Clean", "Cleaning", "25", "   ", "").expect("valid input");
    assert!(service.description.is_none());

    let service = build_service_create("Deep Clean", "Cleaning", "25", " Thorough. ", "")
        .expect("valid input");
    assert_eq!(service.description.as_deref(), Some("Thorough."));
}
