//! Places autocomplete and geocoding client.
//!
//! Talks to the mapping provider's REST endpoints: autocomplete predictions
//! restricted to one country, place details for a chosen prediction, and
//! geocode-by-address for the typed text. The envelope parsing is split out
//! of the HTTP calls so it runs in host tests.
//!
//! A non-OK provider status resolves to an empty/`None` result with a warn
//! log; the UI treats that as "nothing to show" rather than an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "places_test.rs"]
mod places_test;

use serde::Deserialize;

use super::types::{GeocodePoint, Geometry, PlaceDetails, Suggestion};
use crate::util::page_meta;

const OK: &str = "OK";
/// Provider status for "no matches", which is not worth a warning.
const ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Owned handle to the places provider for one address form.
///
/// Constructed where the form mounts and moved into its callbacks; there is
/// no page-global widget instance.
#[derive(Clone, Debug)]
pub struct PlacesClient {
    api_key: String,
    country: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionEnvelope {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsEnvelope {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeEnvelope {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeHit>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeHit {
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

impl PlacesClient {
    pub fn new(api_key: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            country: country.into(),
        }
    }

    /// Build a client from the page's `<meta name="maps-api-key">` tag,
    /// restricted to the storefront's delivery country.
    /// Returns `None` (with a warn log) when the key is not on the page.
    pub fn from_page() -> Option<Self> {
        match page_meta::maps_api_key() {
            Some(key) => Some(Self::new(key, "uz")),
            None => {
                leptos::logging::warn!("maps-api-key meta tag missing; address lookup disabled");
                None
            }
        }
    }

    /// Fetch autocomplete predictions for a partial address, restricted to
    /// geocode/establishment results in the client's country.
    pub async fn fetch_suggestions(&self, input: &str) -> Vec<Suggestion> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        #[cfg(feature = "hydrate")]
        {
            let url = format!(
                "https://maps.googleapis.com/maps/api/place/autocomplete/json\
                 ?input={}&types=geocode|establishment&components=country:{}&key={}",
                encode(input),
                self.country,
                self.api_key,
            );
            match get_json::<SuggestionEnvelope>(&url).await {
                Some(envelope) => suggestions_from(envelope),
                None => Vec::new(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Vec::new()
        }
    }

    /// Fetch details (address components, geometry, formatted address) for
    /// a prediction chosen from the suggestion list.
    pub async fn fetch_place(&self, place_id: &str) -> Option<PlaceDetails> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!(
                "https://maps.googleapis.com/maps/api/place/details/json\
                 ?place_id={}&fields=address_component,formatted_address,geometry&key={}",
                encode(place_id),
                self.api_key,
            );
            let envelope = get_json::<DetailsEnvelope>(&url).await?;
            place_from(envelope)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = place_id;
            None
        }
    }

    /// Geocode the current text of the address field; yields the first
    /// result's coordinates and resolved address.
    pub async fn geocode_address(&self, address: &str) -> Option<GeocodePoint> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!(
                "https://maps.googleapis.com/maps/api/geocode/json?address={}&key={}",
                encode(address),
                self.api_key,
            );
            let envelope = get_json::<GeocodeEnvelope>(&url).await?;
            first_geocode_hit(envelope)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = address;
            None
        }
    }
}

/// Extract predictions, logging non-OK provider statuses.
pub fn suggestions_from(envelope: SuggestionEnvelope) -> Vec<Suggestion> {
    if envelope.status != OK {
        if envelope.status != ZERO_RESULTS {
            leptos::logging::warn!("autocomplete status {}", envelope.status);
        }
        return Vec::new();
    }
    envelope.predictions
}

/// Extract the place details, logging non-OK provider statuses.
pub fn place_from(envelope: DetailsEnvelope) -> Option<PlaceDetails> {
    if envelope.status != OK {
        leptos::logging::warn!("place details status {}", envelope.status);
        return None;
    }
    envelope.result
}

/// Extract the first geocode hit, logging non-OK provider statuses.
pub fn first_geocode_hit(envelope: GeocodeEnvelope) -> Option<GeocodePoint> {
    if envelope.status != OK {
        if envelope.status != ZERO_RESULTS {
            leptos::logging::warn!("geocode status {}", envelope.status);
        }
        return None;
    }
    envelope.results.first().map(|hit| GeocodePoint {
        latitude: hit.geometry.location.lat,
        longitude: hit.geometry.location.lng,
        formatted_address: hit.formatted_address.clone(),
    })
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        leptos::logging::warn!("places request failed: {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

#[cfg(feature = "hydrate")]
fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
