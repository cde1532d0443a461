//! REST API helpers for communicating with the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Listing fetches degrade to `None` so pages render empty instead of
//! crashing hydration. Cart mutations return `Result` so callers can
//! release the per-item in-flight guard on transport failure.

#![allow(clippy::unused_async)]

use super::types::{CartPayload, CartResponse, MenuItem, Profile};

/// Fetch the marketplace menu from `/api/marketplace`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_menu() -> Option<Vec<MenuItem>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/marketplace")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<MenuItem>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the caller's cart lines and amounts from `/api/cart`.
pub async fn fetch_cart() -> Option<CartPayload> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/cart").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CartPayload>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the saved profile used to prefill the checkout form.
pub async fn fetch_profile() -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/profile")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Increment the cart quantity for a food item.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn add_to_cart(food_id: i64) -> Result<CartResponse, String> {
    mutate_cart(&format!("/marketplace/add_to_cart/{food_id}/")).await
}

/// Decrement the cart quantity for a food item.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn decrease_cart(food_id: i64) -> Result<CartResponse, String> {
    mutate_cart(&format!("/marketplace/decrease_cart/{food_id}/")).await
}

/// Remove a cart line entirely, keyed by its cart line id.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn delete_cart(cart_id: i64) -> Result<CartResponse, String> {
    mutate_cart(&format!("/marketplace/delete_cart/{cart_id}/")).await
}

/// Issue one cart mutation GET and decode the status-tagged response.
/// The server rejects requests without the XMLHttpRequest marker header.
async fn mutate_cart(url: &str) -> Result<CartResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .header("x-requested-with", "XMLHttpRequest")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("cart request failed: {}", resp.status()));
        }
        resp.json::<CartResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}
