//! Marketplace listing page with per-item cart controls.

use leptos::prelude::*;

use crate::components::cart_controls::CartControls;
use crate::state::cart::CartState;

/// Marketplace page — lists the menu and seeds the displayed quantities
/// from each item's own payload entry.
#[component]
pub fn MarketplacePage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let menu = LocalResource::new(|| crate::net::api::fetch_menu());

    // Seed quantities and the badge once the listing arrives.
    Effect::new(move || {
        if let Some(items) = menu.get().flatten() {
            cart.update(|c| c.seed(items.iter().map(|item| (item.food_id, item.qty))));
        }
    });

    view! {
        <div class="marketplace-page">
            <h1>"Menu"</h1>
            <Suspense fallback=move || view! { <p>"Loading menu..."</p> }>
                {move || {
                    menu.get()
                        .map(|maybe| {
                            match maybe {
                                Some(items) if !items.is_empty() => {
                                    view! {
                                        <ul class="menu-list">
                                            {items
                                                .into_iter()
                                                .map(|item| {
                                                    view! {
                                                        <li class="menu-list__item">
                                                            <span class="menu-list__title">
                                                                {item.food_title.clone()}
                                                            </span>
                                                            <span class="menu-list__price">
                                                                {format!("{:.2}", item.price)}
                                                            </span>
                                                            <CartControls food_id=item.food_id/>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                _ => {
                                    view! {
                                        <p class="menu-list__empty">
                                            "No dishes available right now."
                                        </p>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
