//! Wire payloads for the cart API and the places/geocoding provider.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Aggregate cart counter the server returns with every successful mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CartCounter {
    pub cart_count: u32,
}

/// Order amounts for the cart summary (subtotal / taxes / grand total).
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct CartAmounts {
    pub subtotal: f64,
    pub taxes: f64,
    pub grand_total: f64,
}

/// One cart mutation response, discriminated by the server's `status` field.
///
/// The server emits exactly three statuses. `qty` is absent on delete
/// responses (the line is gone); `cart_amounts` accompanies every
/// successful mutation but is optional so older payloads still parse.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "status")]
pub enum CartResponse {
    Success {
        message: String,
        cart_counter: CartCounter,
        #[serde(default)]
        qty: Option<u32>,
        #[serde(default)]
        cart_amounts: Option<CartAmounts>,
    },
    Failed {
        message: String,
    },
    #[serde(rename = "login_required")]
    LoginRequired {
        message: String,
    },
}

/// A food item on the marketplace listing. `qty` is the caller's current
/// cart quantity for that item, zero when it is not in the cart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MenuItem {
    pub food_id: i64,
    pub food_title: String,
    pub price: f64,
    #[serde(default)]
    pub qty: u32,
}

/// One line of the caller's cart. The delete endpoint is keyed by the
/// cart line id, the quantity endpoints by the food id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CartLine {
    pub cart_id: i64,
    pub food_id: i64,
    pub food_title: String,
    pub price: f64,
    pub qty: u32,
}

/// Cart page payload: the lines plus the current amounts.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CartPayload {
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub cart_amounts: CartAmounts,
}

/// Saved profile fields used to prefill the checkout address form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pin_code: String,
}

/// An autocomplete prediction for a partial address.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Suggestion {
    pub description: String,
    pub place_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// A fragment of a resolved address tagged with one or more semantic types
/// (`country`, `locality`, `administrative_area_level_1`, `postal_code`, ...).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    pub types: Vec<String>,
}

/// Details for a place chosen from the suggestion list.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// First hit of a geocode-by-address lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct GeocodePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
}
