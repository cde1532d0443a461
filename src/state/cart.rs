#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::{BTreeMap, HashSet};

use crate::net::types::{CartAmounts, CartResponse};

/// Typed outcome of one cart mutation, after its response has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Counters were updated from the response.
    Updated { message: String },
    /// Server-reported failure; nothing changed.
    Failed { message: String },
    /// The caller must authenticate; nothing changed.
    LoginRequired { message: String },
}

/// Shared cart state: the header badge count, per-item quantities keyed by
/// food id, the amounts summary, and the per-item in-flight guard.
///
/// The guard serializes mutations per control: a click on an item with an
/// outstanding request is dropped, so responses for one item cannot arrive
/// out of order and overwrite its quantity with a stale value.
#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub cart_count: u32,
    pub amounts: CartAmounts,
    quantities: BTreeMap<i64, u32>,
    in_flight: HashSet<i64>,
}

impl CartState {
    /// Seed per-item quantities from a page payload. Each item's displayed
    /// quantity comes from its own entry; the badge count is their sum.
    pub fn seed<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (i64, u32)>,
    {
        self.quantities = items.into_iter().collect();
        self.cart_count = self.quantities.values().sum();
    }

    /// Displayed quantity for one item; zero when not in the cart.
    pub fn qty(&self, food_id: i64) -> u32 {
        self.quantities.get(&food_id).copied().unwrap_or(0)
    }

    pub fn is_in_flight(&self, food_id: i64) -> bool {
        self.in_flight.contains(&food_id)
    }

    /// Claim the in-flight slot for an item. Returns `false` (the click is
    /// dropped) while a mutation for that item is outstanding. Different
    /// items stay independent.
    pub fn begin(&mut self, food_id: i64) -> bool {
        self.in_flight.insert(food_id)
    }

    /// Release the guard without touching counters. Used on transport
    /// failure, which leaves the UI unchanged.
    pub fn abort(&mut self, food_id: i64) {
        self.in_flight.remove(&food_id);
    }

    /// Release the guard and apply one mutation response. Only `Success`
    /// touches the counters: with a `qty` the item's quantity is replaced,
    /// without one (delete) the item's entry is removed.
    pub fn finish(&mut self, food_id: i64, response: &CartResponse) -> MutationOutcome {
        self.in_flight.remove(&food_id);
        match response {
            CartResponse::Success {
                message,
                cart_counter,
                qty,
                cart_amounts,
            } => {
                self.cart_count = cart_counter.cart_count;
                match qty {
                    Some(qty) => {
                        self.quantities.insert(food_id, *qty);
                    }
                    None => {
                        self.quantities.remove(&food_id);
                    }
                }
                if let Some(amounts) = cart_amounts {
                    self.amounts = *amounts;
                }
                MutationOutcome::Updated {
                    message: message.clone(),
                }
            }
            CartResponse::Failed { message } => MutationOutcome::Failed {
                message: message.clone(),
            },
            CartResponse::LoginRequired { message } => MutationOutcome::LoginRequired {
                message: message.clone(),
            },
        }
    }
}
