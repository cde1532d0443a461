//! Header cart counter badge.

use leptos::prelude::*;

use crate::state::cart::CartState;

/// Aggregate item count in the site header, driven by the shared cart state.
#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let count = move || cart.get().cart_count;

    view! {
        <span class="cart-badge" id="cart_counter">{count}</span>
    }
}
