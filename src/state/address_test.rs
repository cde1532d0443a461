use super::*;
use crate::net::types::AddressComponent;

fn component(long_name: &str, types: &[&str]) -> AddressComponent {
    AddressComponent {
        long_name: long_name.to_owned(),
        short_name: String::new(),
        types: types.iter().map(|t| (*t).to_owned()).collect(),
    }
}

// =============================================================
// Component scatter
// =============================================================

#[test]
fn scatter_maps_country_city_and_state() {
    let mut form = AddressFields::default();
    form.scatter_components(&[
        component("Uzbekistan", &["country", "political"]),
        component("Tashkent", &["locality", "political"]),
        component("Tashkent Region", &["administrative_area_level_1", "political"]),
    ]);

    assert_eq!(form.country, "Uzbekistan");
    assert_eq!(form.city, "Tashkent");
    assert_eq!(form.state_province, "Tashkent Region");
}

#[test]
fn postal_code_with_extra_type_still_sets_pin_code() {
    let mut form = AddressFields::default();
    form.scatter_components(&[component("100100", &["postal_code", "political"])]);
    assert_eq!(form.pin_code, "100100");
}

#[test]
fn later_non_postal_component_does_not_clear_pin_code() {
    let mut form = AddressFields::default();
    form.scatter_components(&[
        component("100100", &["postal_code"]),
        component("Uzbekistan", &["country", "political"]),
    ]);
    assert_eq!(form.pin_code, "100100");
}

#[test]
fn scatter_ignores_unmapped_component_types() {
    let mut form = AddressFields::default();
    form.scatter_components(&[component("Amir Temur Avenue", &["route"])]);
    assert_eq!(form, AddressFields::default());
}

// =============================================================
// Geocode application
// =============================================================

#[test]
fn apply_geocode_writes_coords_and_resolved_address() {
    let mut form = AddressFields {
        address: "amir temur ave 12".to_owned(),
        ..AddressFields::default()
    };
    form.apply_geocode(&GeocodePoint {
        latitude: 41.311,
        longitude: 69.28,
        formatted_address: "12 Amir Temur Avenue, Tashkent, Uzbekistan".to_owned(),
    });

    assert_eq!(form.latitude, "41.311");
    assert_eq!(form.longitude, "69.28");
    assert_eq!(form.address, "12 Amir Temur Avenue, Tashkent, Uzbekistan");
}

#[test]
fn missing_geometry_only_sets_the_placeholder() {
    let mut form = AddressFields {
        country: "Uzbekistan".to_owned(),
        ..AddressFields::default()
    };
    form.hint_missing_geometry();

    assert_eq!(form.placeholder, MISSING_GEOMETRY_HINT);
    assert_eq!(form.country, "Uzbekistan");
}

// =============================================================
// Profile prefill
// =============================================================

#[test]
fn from_profile_prefills_form_defaults() {
    let profile = Profile {
        address: "somewhere".to_owned(),
        country: "Uzbekistan".to_owned(),
        state: "Tashkent Region".to_owned(),
        city: "Tashkent".to_owned(),
        pin_code: "100100".to_owned(),
    };
    let form = AddressFields::from_profile(&profile);

    assert_eq!(form.address, "somewhere");
    assert_eq!(form.state_province, "Tashkent Region");
    assert_eq!(form.pin_code, "100100");
    assert!(form.latitude.is_empty());
}
