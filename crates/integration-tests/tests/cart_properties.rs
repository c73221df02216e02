//! Integration tests for the cart engine.
//!
//! These exercise the public API the way a presentation layer would: build
//! products, send intents, read back lines and totals.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use shopapp_core::{Money, ProductId, format_amount};
use shopapp_integration_tests::product;
use shopapp_storefront::{CartError, CartStore, CheckoutSummary, SharedCart};

// =============================================================================
// Merge and Quantity Floor
// =============================================================================

#[test]
fn test_adding_twice_merges_into_one_line() {
    let mut cart = CartStore::new();
    let p = product("P", 500);

    cart.add_item(&p, 1).unwrap();
    cart.add_item(&p, 1).unwrap();

    assert_eq!(cart.line_items().len(), 1);
    assert_eq!(cart.get(&p.id).unwrap().quantity, 2);
}

#[test]
fn test_merge_scenario_quantity_and_subtotal() {
    let mut cart = CartStore::new();
    let a = product("A", 1000);

    cart.add_item(&a, 1).unwrap();
    cart.add_item(&a, 2).unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(&a.id).unwrap().quantity, 3);
    assert_eq!(cart.subtotal(), Money::new(3000));
}

#[test]
fn test_zero_or_negative_quantity_removes_line() {
    let mut cart = CartStore::new();
    let a = product("A", 1000);
    let b = product("B", 1000);
    cart.add_item(&a, 2).unwrap();
    cart.add_item(&b, 2).unwrap();

    cart.set_quantity(&a.id, 0).unwrap();
    cart.set_quantity(&b.id, -1).unwrap();

    assert!(cart.is_empty());
}

#[test]
fn test_no_line_ever_below_one() {
    let mut cart = CartStore::new();
    let ids: Vec<ProductId> = (0..5).map(|i| ProductId::new(i.to_string())).collect();
    for id in &ids {
        cart.add_item(&product(id.as_str(), 100), 2).unwrap();
    }

    for (i, id) in ids.iter().enumerate() {
        let delta = -i64::try_from(i).unwrap();
        cart.adjust_quantity(id, delta).unwrap();
        assert!(cart.line_items().iter().all(|line| line.quantity >= 1));
    }

    // 2, 1, then three removed
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.len(), 2);
}

#[test]
fn test_invalid_quantity_is_rejected_without_side_effects() {
    let mut cart = CartStore::new();
    let a = product("A", 1000);
    cart.add_item(&a, 1).unwrap();

    let before = cart.clone();
    assert!(matches!(
        cart.add_item(&a, 0),
        Err(CartError::InvalidQuantity { quantity: 0 })
    ));
    assert_eq!(cart, before);
}

// =============================================================================
// Ordering and Removal
// =============================================================================

#[test]
fn test_order_preserved_across_quantity_changes() {
    let mut cart = CartStore::new();
    for id in ["x", "y", "z"] {
        cart.add_item(&product(id, 10), 1).unwrap();
    }

    cart.set_quantity(&ProductId::new("z"), 10).unwrap();
    cart.add_item(&product("x", 10), 5).unwrap();
    cart.adjust_quantity(&ProductId::new("y"), 3).unwrap();

    let order: Vec<&str> = cart
        .line_items()
        .iter()
        .map(|line| line.product_id.as_str())
        .collect();
    assert_eq!(order, ["x", "y", "z"]);
}

#[test]
fn test_remove_then_only_b_remains() {
    let mut cart = CartStore::new();
    let a = product("A", 1);
    let b = product("B", 2);
    cart.add_item(&a, 1).unwrap();
    cart.add_item(&b, 1).unwrap();

    cart.remove_item(&a.id);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.line_items().first().unwrap().product_id, b.id);
}

#[test]
fn test_remove_absent_is_not_an_error() {
    let mut cart = CartStore::new();
    assert!(!cart.remove_item(&ProductId::new("ghost")));
    assert!(cart.is_empty());
}

#[test]
fn test_update_absent_is_item_not_found() {
    let mut cart = CartStore::new();
    let ghost = ProductId::new("ghost");
    assert_eq!(
        cart.set_quantity(&ghost, 3),
        Err(CartError::ItemNotFound(ghost.clone()))
    );
    assert_eq!(
        cart.adjust_quantity(&ghost, 1),
        Err(CartError::ItemNotFound(ghost))
    );
}

#[test]
fn test_clear_empty_cart() {
    let mut cart = CartStore::new();
    cart.clear();
    cart.clear();
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.subtotal(), Money::ZERO);
}

// =============================================================================
// Totals and Formatting
// =============================================================================

#[test]
fn test_totals_for_sample_cart() {
    let mut cart = CartStore::new();
    cart.add_item(&product("1", 10_990_000), 1).unwrap();
    cart.add_item(&product("3", 1_590_000), 2).unwrap();

    assert_eq!(cart.subtotal(), Money::new(14_170_000));
    assert_eq!(cart.total(Money::new(30_000)), Money::new(14_200_000));

    let summary = CheckoutSummary::of(&cart, Money::new(30_000));
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total.to_string(), "14.200.000 đ");
}

#[test]
fn test_totals_recomputed_after_each_mutation() {
    let mut cart = CartStore::new();
    let a = product("A", 250);
    cart.add_item(&a, 4).unwrap();
    assert_eq!(cart.subtotal(), Money::new(1000));

    cart.set_quantity(&a.id, 1).unwrap();
    assert_eq!(cart.subtotal(), Money::new(250));

    cart.clear();
    assert_eq!(cart.total(Money::new(30_000)), Money::new(30_000));
}

#[test]
fn test_format_price() {
    assert_eq!(format_amount(10_990_000), "10.990.000");
    assert_eq!(format_amount(30_000), "30.000");
    assert_eq!(format_amount(0), "0");
}

#[test]
fn test_line_items_serialize_for_rendering() {
    let mut cart = CartStore::new();
    cart.add_item(&product("1", 1000), 2).unwrap();

    let json = serde_json::to_value(cart.line_items()).unwrap();
    assert_eq!(json[0]["product_id"], "1");
    assert_eq!(json[0]["quantity"], 2);
    assert_eq!(json[0]["unit_price"], 1000);
}

// =============================================================================
// Shared Cart
// =============================================================================

#[test]
fn test_shared_cart_serializes_interleaved_mutations() {
    let cart = SharedCart::new();
    let a = product("A", 10);
    let b = product("B", 20);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    cart.add_item(&a, 1).unwrap();
                    cart.add_item(&b, 2).unwrap();
                }
            });
        }
    });

    let lines = cart.snapshot();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].quantity, 400);
    assert_eq!(lines[1].quantity, 800);
    assert_eq!(cart.subtotal(), Money::new(400 * 10 + 800 * 20));
}
