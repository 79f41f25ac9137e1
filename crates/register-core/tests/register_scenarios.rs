//! End-to-end register scenarios: ringing up, discounting and voiding in
//! the order a cashier would.

use register_core::{DiscountOutcome, Register};

#[test]
fn test_total_is_sum_of_price_times_quantity() {
    let purchases = [
        ("Apple", 0.5, 4),
        ("Bread", 2.25, 1),
        ("Milk", 1.1, 2),
        ("Gum", 0.0, 3),
        ("Coupon", -1.0, 1),
    ];

    let mut register = Register::default();
    let mut expected = 0.0;
    for (title, price, qty) in purchases {
        register.add_item(title, price, qty);
        expected += price * qty as f64;
    }

    assert!((register.total() - expected).abs() < 1e-9);
}

#[test]
fn test_ledger_length_tracks_quantities_and_voids() {
    let mut register = Register::default();
    register.add_item("A", 1.0, 3);
    register.add_item("B", 1.0, 5);
    assert_eq!(register.item_count(), 8);

    register.void_last_transaction();
    assert_eq!(register.item_count(), 3);

    register.add_item("C", 1.0, 2);
    assert_eq!(register.item_count(), 5);
}

#[test]
fn test_second_void_changes_nothing() {
    let mut register = Register::with_discount(10).unwrap();
    register.add_item("Apple", 1.0, 3);

    register.void_last_transaction();
    let total = register.total();
    let items = register.items().to_vec();

    register.void_last_transaction();
    assert_eq!(register.total(), total);
    assert_eq!(register.items(), items.as_slice());
}

#[test]
fn test_discount_message_formats() {
    let mut whole = Register::with_discount(20).unwrap();
    whole.add_item("Item", 100.0, 1);
    assert_eq!(
        whole.apply_discount().message(),
        "After the discount, the total comes to $80."
    );
    assert_eq!(whole.total(), 80.0);

    let mut fractional = Register::with_discount(10).unwrap();
    fractional.add_item("Item", 99.99, 1);
    assert_eq!(
        fractional.apply_discount().to_string(),
        "After the discount, the total comes to $89.99."
    );
    assert!((fractional.total() - 89.991).abs() < 1e-9);
}

#[test]
fn test_no_discount_leaves_total() {
    let mut register = Register::with_discount(0).unwrap();
    register.add_item("Item", 100.0, 1);

    let outcome = register.apply_discount();
    assert_eq!(outcome, DiscountOutcome::NoDiscount);
    assert_eq!(outcome.message(), "There is no discount to apply.");
    assert_eq!(register.total(), 100.0);
}

#[test]
fn test_apple_banana_void_scenario() {
    let mut register = Register::with_discount(10).unwrap();

    register.add_item("Apple", 1.00, 3);
    assert_eq!(register.total(), 3.00);
    assert_eq!(register.items(), ["Apple", "Apple", "Apple"]);

    register.add_item("Banana", 2.00, 1);
    assert_eq!(register.total(), 5.00);
    assert_eq!(register.items(), ["Apple", "Apple", "Apple", "Banana"]);

    register.void_last_transaction();
    assert_eq!(register.total(), 3.00);
    assert_eq!(register.items(), ["Apple", "Apple", "Apple"]);
}

#[test]
fn test_void_snaps_negative_residue() {
    let mut register = Register::default();
    register.add_item("Adjustment", -1e-12, 1);
    register.add_item("Bag", 0.0, 1);
    assert!(register.total() < 0.0);

    register.void_last_transaction();
    assert_eq!(register.total(), 0.0);
}

#[test]
fn test_void_cancels_float_residue() {
    let mut register = Register::default();
    register.add_item("Gum", 0.1, 1);
    register.add_item("Gum", 0.2, 1);
    register.void_last_transaction();
    register.add_item("Mint", -0.1, 1);

    // 0.1 + 0.2 - 0.2 - 0.1 leaves residue only a snap can clear
    register.add_item("Bag", 0.0, 1);
    register.void_last_transaction();
    assert_eq!(register.total(), 0.0);
}

#[test]
fn test_void_removes_only_latest_duplicate() {
    let mut register = Register::default();
    register.add_item("X", 1.0, 2);
    register.add_item("X", 1.0, 1);
    assert_eq!(register.items(), ["X", "X", "X"]);

    register.void_last_transaction();
    assert_eq!(register.items(), ["X", "X"]);
    assert_eq!(register.total(), 2.0);
}

#[test]
fn test_discount_then_void_subtracts_undiscounted_amount() {
    let mut register = Register::with_discount(50).unwrap();
    register.add_item("Lamp", 10.0, 2);
    register.apply_discount();
    assert_eq!(register.total(), 10.0);

    register.void_last_transaction();
    assert_eq!(register.total(), -10.0);
    assert!(register.items().is_empty());
}

#[test]
fn test_snapshot_serializes_to_camel_case_json() {
    let mut register = Register::with_discount(15).unwrap();
    register.add_item("Apple", 1.5, 2);

    let json = serde_json::to_value(register.snapshot()).unwrap();
    assert_eq!(json["discountPercent"], 15);
    assert_eq!(json["total"], 3.0);
    assert_eq!(json["items"], serde_json::json!(["Apple", "Apple"]));
    assert_eq!(json["lastTransaction"]["title"], "Apple");
    assert_eq!(json["lastTransaction"]["quantity"], 2);
    assert!(json["openedAt"].is_string());
}
