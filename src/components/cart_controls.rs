//! Per-item cart quantity controls.
//!
//! Each control claims the item's in-flight slot before issuing its request;
//! a click while a request for the same item is outstanding is dropped, so
//! responses for one item cannot race each other. Failure and
//! login-required responses surface through the shared alert state.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::ui::AlertState;

/// Which mutation a control fires.
#[derive(Clone, Copy, Debug)]
enum CartAction {
    Add,
    Decrease,
    Remove { cart_id: i64 },
}

/// The `+` / `-` controls and quantity label for one food item. Passing
/// `cart_id` (cart page) adds the remove control.
#[component]
pub fn CartControls(
    food_id: i64,
    #[prop(optional)] cart_id: Option<i64>,
) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let alerts = expect_context::<RwSignal<AlertState>>();

    let qty = move || cart.get().qty(food_id);

    let on_decrease = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatch(cart, alerts, food_id, CartAction::Decrease);
    };
    let on_add = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatch(cart, alerts, food_id, CartAction::Add);
    };

    view! {
        <span class="cart-controls">
            <a href="#" class="decrease_cart" on:click=on_decrease>"-"</a>
            <span class="item_qty" id=format!("qty-{food_id}")>{qty}</span>
            <a href="#" class="add_to_cart" on:click=on_add>"+"</a>
            {cart_id.map(|cart_id| {
                let on_remove = move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    dispatch(cart, alerts, food_id, CartAction::Remove { cart_id });
                };
                view! {
                    <a href="#" class="cart-controls__remove" on:click=on_remove>
                        "remove"
                    </a>
                }
            })}
        </span>
    }
}

/// Claim the item's in-flight slot and run one mutation round-trip.
fn dispatch(
    cart: RwSignal<CartState>,
    alerts: RwSignal<AlertState>,
    food_id: i64,
    action: CartAction,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;
        use crate::state::ui::alert_for;

        let claimed = cart.try_update(|c| c.begin(food_id)).unwrap_or(false);
        if !claimed {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = match action {
                CartAction::Add => api::add_to_cart(food_id).await,
                CartAction::Decrease => api::decrease_cart(food_id).await,
                CartAction::Remove { cart_id } => api::delete_cart(cart_id).await,
            };
            match result {
                Ok(response) => {
                    let outcome = cart.try_update(|c| c.finish(food_id, &response));
                    if let Some(alert) = outcome.as_ref().and_then(alert_for) {
                        alerts.update(|a| a.show(alert));
                    }
                }
                Err(e) => {
                    // Transport failure: release the guard, leave the UI as is.
                    leptos::logging::warn!("cart request failed: {e}");
                    cart.update(|c| c.abort(food_id));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cart, alerts, food_id, action);
    }
}
