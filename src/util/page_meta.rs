//! Page `<meta>` tag lookups.
//!
//! The server template injects the maps API key into the page head; the
//! client reads it from there instead of compiling it in. Requires a
//! browser environment.

/// Read the maps API key from `<meta name="maps-api-key">`.
///
/// Returns `None` on the server, when the tag is missing, or when its
/// content is empty.
pub fn maps_api_key() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let element = document.query_selector("meta[name='maps-api-key']").ok()??;
        let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        let content = meta.content();
        if content.is_empty() { None } else { Some(content) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
