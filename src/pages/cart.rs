//! Cart page: line items with quantity/remove controls and the amounts
//! summary, both tracking the shared cart state.

use leptos::prelude::*;

use crate::components::cart_controls::CartControls;
use crate::state::cart::CartState;

/// Cart page — shows the caller's cart lines and order amounts.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let payload = LocalResource::new(|| crate::net::api::fetch_cart());

    // Seed quantities and amounts once the cart payload arrives.
    Effect::new(move || {
        if let Some(p) = payload.get().flatten() {
            cart.update(|c| {
                c.seed(p.items.iter().map(|line| (line.food_id, line.qty)));
                c.amounts = p.cart_amounts;
            });
        }
    });

    let amounts = move || cart.get().amounts;

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            <Suspense fallback=move || view! { <p>"Loading cart..."</p> }>
                {move || {
                    payload
                        .get()
                        .map(|maybe| {
                            match maybe {
                                Some(p) if !p.items.is_empty() => {
                                    view! {
                                        <ul class="cart-list">
                                            {p.items
                                                .into_iter()
                                                .map(|line| {
                                                    view! {
                                                        <li class="cart-list__item">
                                                            <span class="cart-list__title">
                                                                {line.food_title.clone()}
                                                            </span>
                                                            <span class="cart-list__price">
                                                                {format!("{:.2}", line.price)}
                                                            </span>
                                                            <CartControls
                                                                food_id=line.food_id
                                                                cart_id=line.cart_id
                                                            />
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                _ => {
                                    view! { <p class="cart-list__empty">"Your cart is empty."</p> }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>

            <div class="cart-summary">
                <p class="cart-summary__row">
                    "Subtotal: " {move || format!("{:.2}", amounts().subtotal)}
                </p>
                <p class="cart-summary__row">
                    "Taxes: " {move || format!("{:.2}", amounts().taxes)}
                </p>
                <p class="cart-summary__row cart-summary__row--total">
                    "Grand total: " {move || format!("{:.2}", amounts().grand_total)}
                </p>
                <a class="btn btn--primary" href="/checkout">"Proceed to checkout"</a>
            </div>
        </div>
    }
}
