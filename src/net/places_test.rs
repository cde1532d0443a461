use super::*;

fn geocode_envelope(status: &str, results: serde_json::Value) -> GeocodeEnvelope {
    serde_json::from_value(serde_json::json!({
        "status": status,
        "results": results,
    }))
    .expect("geocode envelope")
}

// =============================================================
// Geocode envelope
// =============================================================

#[test]
fn first_geocode_hit_uses_first_result() {
    let envelope = geocode_envelope(
        "OK",
        serde_json::json!([
            {
                "formatted_address": "12 Amir Temur Avenue, Tashkent, Uzbekistan",
                "geometry": {"location": {"lat": 41.311, "lng": 69.28}}
            },
            {
                "formatted_address": "somewhere else",
                "geometry": {"location": {"lat": 0.0, "lng": 0.0}}
            }
        ]),
    );

    let hit = first_geocode_hit(envelope).expect("first hit");
    assert_eq!(hit.latitude, 41.311);
    assert_eq!(hit.longitude, 69.28);
    assert_eq!(
        hit.formatted_address,
        "12 Amir Temur Avenue, Tashkent, Uzbekistan"
    );
}

#[test]
fn non_ok_geocode_status_yields_none() {
    let envelope = geocode_envelope(
        "REQUEST_DENIED",
        serde_json::json!([
            {"formatted_address": "x", "geometry": {"location": {"lat": 1.0, "lng": 2.0}}}
        ]),
    );
    assert!(first_geocode_hit(envelope).is_none());
}

#[test]
fn empty_geocode_results_yield_none() {
    let envelope = geocode_envelope("ZERO_RESULTS", serde_json::json!([]));
    assert!(first_geocode_hit(envelope).is_none());
}

// =============================================================
// Autocomplete / details envelopes
// =============================================================

#[test]
fn suggestions_pass_through_on_ok() {
    let envelope: SuggestionEnvelope = serde_json::from_value(serde_json::json!({
        "status": "OK",
        "predictions": [
            {"description": "Tashkent, Uzbekistan", "place_id": "p-1"},
            {"description": "Tashkent Region, Uzbekistan", "place_id": "p-2"}
        ]
    }))
    .expect("suggestion envelope");

    let suggestions = suggestions_from(envelope);
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].place_id, "p-1");
}

#[test]
fn suggestions_drop_on_non_ok_status() {
    let envelope: SuggestionEnvelope = serde_json::from_value(serde_json::json!({
        "status": "OVER_QUERY_LIMIT",
        "predictions": [{"description": "x", "place_id": "p"}]
    }))
    .expect("suggestion envelope");
    assert!(suggestions_from(envelope).is_empty());
}

#[test]
fn place_details_parse_components_and_geometry() {
    let envelope: DetailsEnvelope = serde_json::from_value(serde_json::json!({
        "status": "OK",
        "result": {
            "formatted_address": "Tashkent, Uzbekistan",
            "geometry": {"location": {"lat": 41.3, "lng": 69.2}},
            "address_components": [
                {"long_name": "Uzbekistan", "short_name": "UZ", "types": ["country", "political"]}
            ]
        }
    }))
    .expect("details envelope");

    let place = place_from(envelope).expect("place");
    assert!(place.geometry.is_some());
    assert_eq!(place.address_components[0].long_name, "Uzbekistan");
}

#[test]
fn place_details_without_geometry_still_parse() {
    let envelope: DetailsEnvelope = serde_json::from_value(serde_json::json!({
        "status": "OK",
        "result": {"formatted_address": "vague place"}
    }))
    .expect("details envelope");

    let place = place_from(envelope).expect("place");
    assert!(place.geometry.is_none());
}
