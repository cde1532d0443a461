//! Checkout page hosting the address form, prefilled from the saved profile.

use leptos::prelude::*;

use crate::components::address_form::AddressForm;
use crate::state::address::AddressFields;

/// Checkout page — the address form with autocomplete and geocoding.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let form = RwSignal::new(AddressFields::default());

    let profile = LocalResource::new(|| crate::net::api::fetch_profile());

    // Prefill the form the way the server seeds its checkout defaults.
    Effect::new(move || {
        if let Some(profile) = profile.get().flatten() {
            form.set(AddressFields::from_profile(&profile));
        }
    });

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <AddressForm form=form/>
        </div>
    }
}
