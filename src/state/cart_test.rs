use super::*;

fn success(cart_count: u32, qty: Option<u32>) -> CartResponse {
    serde_json::from_value(match qty {
        Some(qty) => serde_json::json!({
            "status": "Success",
            "message": "Increased the cart quantity",
            "cart_counter": {"cart_count": cart_count},
            "qty": qty,
            "cart_amounts": {"subtotal": 10.0, "taxes": 1.0, "grand_total": 11.0}
        }),
        None => serde_json::json!({
            "status": "Success",
            "message": "Cart item has been deleted!",
            "cart_counter": {"cart_count": cart_count},
            "cart_amounts": {"subtotal": 2.0, "taxes": 0.0, "grand_total": 2.0}
        }),
    })
    .expect("success response")
}

fn failed(message: &str) -> CartResponse {
    serde_json::from_value(serde_json::json!({"status": "Failed", "message": message}))
        .expect("failed response")
}

fn seeded() -> CartState {
    let mut state = CartState::default();
    state.seed([(1, 2), (2, 1)]);
    state
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn seed_gives_each_item_its_own_qty() {
    let state = seeded();
    assert_eq!(state.qty(1), 2);
    assert_eq!(state.qty(2), 1);
    assert_eq!(state.qty(99), 0);
}

#[test]
fn seed_sets_badge_to_sum_of_quantities() {
    assert_eq!(seeded().cart_count, 3);
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn begin_rejects_second_mutation_for_same_item() {
    let mut state = seeded();
    assert!(state.begin(1));
    assert!(!state.begin(1));
    assert!(state.is_in_flight(1));
}

#[test]
fn begin_allows_different_items_concurrently() {
    let mut state = seeded();
    assert!(state.begin(1));
    assert!(state.begin(2));
}

#[test]
fn finish_releases_the_guard() {
    let mut state = seeded();
    assert!(state.begin(1));
    state.finish(1, &success(4, Some(3)));
    assert!(!state.is_in_flight(1));
    assert!(state.begin(1));
}

#[test]
fn abort_releases_guard_without_touching_counters() {
    let mut state = seeded();
    assert!(state.begin(1));
    state.abort(1);
    assert!(!state.is_in_flight(1));
    assert_eq!(state.cart_count, 3);
    assert_eq!(state.qty(1), 2);
}

// =============================================================
// Applying responses
// =============================================================

#[test]
fn success_updates_badge_item_qty_and_amounts() {
    let mut state = seeded();
    state.begin(1);
    let outcome = state.finish(1, &success(5, Some(3)));

    assert_eq!(
        outcome,
        MutationOutcome::Updated {
            message: "Increased the cart quantity".to_owned()
        }
    );
    assert_eq!(state.cart_count, 5);
    assert_eq!(state.qty(1), 3);
    assert_eq!(state.amounts.grand_total, 11.0);
}

#[test]
fn success_only_touches_the_mutated_item() {
    let mut state = seeded();
    state.begin(1);
    state.finish(1, &success(5, Some(3)));
    assert_eq!(state.qty(2), 1);
}

#[test]
fn delete_success_removes_the_item_entry() {
    let mut state = seeded();
    state.begin(2);
    state.finish(2, &success(2, None));
    assert_eq!(state.qty(2), 0);
    assert_eq!(state.cart_count, 2);
    assert_eq!(state.amounts.grand_total, 2.0);
}

#[test]
fn failed_leaves_counters_untouched() {
    let mut state = seeded();
    state.begin(1);
    let outcome = state.finish(1, &failed("Out of stock"));

    assert_eq!(
        outcome,
        MutationOutcome::Failed {
            message: "Out of stock".to_owned()
        }
    );
    assert_eq!(state.cart_count, 3);
    assert_eq!(state.qty(1), 2);
    assert_eq!(state.amounts, CartAmounts::default());
}

#[test]
fn login_required_leaves_counters_untouched() {
    let mut state = seeded();
    state.begin(1);
    let outcome = state.finish(
        1,
        &serde_json::from_value(serde_json::json!({
            "status": "login_required",
            "message": "Please login to continue"
        }))
        .expect("login_required response"),
    );

    assert_eq!(
        outcome,
        MutationOutcome::LoginRequired {
            message: "Please login to continue".to_owned()
        }
    );
    assert_eq!(state.cart_count, 3);
    assert_eq!(state.qty(1), 2);
}
