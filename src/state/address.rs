#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

use crate::net::types::{AddressComponent, GeocodePoint, Profile};

/// Placeholder shown when a selection carries no geometry.
pub const MISSING_GEOMETRY_HINT: &str = "Start typing...";

/// Field values of the checkout address form. Coordinates are kept as
/// strings because they live in hidden form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressFields {
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub country: String,
    pub city: String,
    pub state_province: String,
    pub pin_code: String,
    pub placeholder: String,
}

impl AddressFields {
    /// Prefill from the saved profile, the way the checkout view seeds its
    /// form defaults.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            address: profile.address.clone(),
            country: profile.country.clone(),
            city: profile.city.clone(),
            state_province: profile.state.clone(),
            pin_code: profile.pin_code.clone(),
            ..Self::default()
        }
    }

    /// Scatter a place's address components into the form fields, matching
    /// each component's `types` list.
    ///
    /// The postal code is set whenever any of a component's types is
    /// `postal_code` and is never cleared by an unrelated component. (The
    /// old page glue cleared it on every non-postal component, leaving the
    /// final value dependent on component order.)
    pub fn scatter_components(&mut self, components: &[AddressComponent]) {
        for component in components {
            for kind in &component.types {
                match kind.as_str() {
                    "country" => self.country = component.long_name.clone(),
                    "locality" => self.city = component.long_name.clone(),
                    "administrative_area_level_1" => {
                        self.state_province = component.long_name.clone();
                    }
                    "postal_code" => self.pin_code = component.long_name.clone(),
                    _ => {}
                }
            }
        }
    }

    /// Apply a geocode hit: coordinates into the hidden fields, the address
    /// normalized to the resolved formatted address.
    pub fn apply_geocode(&mut self, point: &GeocodePoint) {
        self.latitude = point.latitude.to_string();
        self.longitude = point.longitude.to_string();
        self.address = point.formatted_address.clone();
    }

    /// A selection without geometry only hints at the input; the other
    /// fields are left alone.
    pub fn hint_missing_geometry(&mut self) {
        self.placeholder = MISSING_GEOMETRY_HINT.to_owned();
    }
}
