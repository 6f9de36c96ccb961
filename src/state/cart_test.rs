use super::*;
use crate::util::storage::MemoryStore;
use serde_json::json;

fn draft(id: &str, item_type: &str, quantity: serde_json::Value) -> CartItemDraft {
    CartItemDraft::new(id, item_type, format!("Item {id}")).with_quantity(quantity)
}

fn stored_items(store: &MemoryStore) -> serde_json::Value {
    serde_json::from_str(&store.raw(CART_STORAGE_KEY).unwrap()).unwrap()
}

// =============================================================
// normalize_quantity
// =============================================================

#[test]
fn normalize_quantity_defaults_to_one() {
    assert_eq!(normalize_quantity(None), 1);
    assert_eq!(normalize_quantity(Some(&json!(null))), 1);
    assert_eq!(normalize_quantity(Some(&json!("two"))), 1);
    assert_eq!(normalize_quantity(Some(&json!([3]))), 1);
}

#[test]
fn normalize_quantity_clamps_non_positive_to_one() {
    assert_eq!(normalize_quantity(Some(&json!(0))), 1);
    assert_eq!(normalize_quantity(Some(&json!(-5))), 1);
    assert_eq!(normalize_quantity(Some(&json!(0.4))), 1);
}

#[test]
fn normalize_quantity_floors_fractions() {
    assert_eq!(normalize_quantity(Some(&json!(2.9))), 2);
    assert_eq!(normalize_quantity(Some(&json!("3.5"))), 3);
    assert_eq!(normalize_quantity(Some(&json!(7))), 7);
}

// =============================================================
// add
// =============================================================

#[test]
fn add_merges_same_key_by_summing_quantities() {
    let mut cart = CartState::default();
    for q in [json!(2), json!("3"), json!(1.7), json!(null)] {
        cart.add(Some(draft("x", "hotel", q))).unwrap();
    }
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2 + 3 + 1 + 1);
}

#[test]
fn add_normalizes_zero_and_negative_to_one_each() {
    let mut cart = CartState::default();
    cart.add(Some(CartItemDraft { id: Some("x".to_owned()), quantity: Some(json!(0)), ..Default::default() }))
        .unwrap();
    cart.add(Some(CartItemDraft { id: Some("x".to_owned()), quantity: Some(json!(-5)), ..Default::default() }))
        .unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].item_type, DEFAULT_ITEM_TYPE);
    assert_eq!(cart.items[0].quantity, 2);
}

#[test]
fn add_keeps_different_types_separate_in_insertion_order() {
    let mut cart = CartState::default();
    cart.add(Some(draft("7", "hotel", json!(1)))).unwrap();
    cart.add(Some(draft("7", "car", json!(1)))).unwrap();
    cart.add(Some(draft("3", "hotel", json!(1)))).unwrap();
    let keys: Vec<(&str, &str)> = cart.items.iter().map(|i| (i.id.as_str(), i.item_type.as_str())).collect();
    assert_eq!(keys, vec![("7", "hotel"), ("7", "car"), ("3", "hotel")]);
}

#[test]
fn add_overrides_price_currency_and_merges_metadata() {
    let mut cart = CartState::default();
    cart.add(Some(
        draft("x", "hotel", json!(1))
            .with_price(100.0, Some("USD".to_owned()))
            .with_metadata("nights", 2)
            .with_metadata("room", "double"),
    ))
    .unwrap();
    cart.add(Some(draft("x", "hotel", json!(1)).with_price(120.0, Some("EUR".to_owned())).with_metadata("nights", 3)))
        .unwrap();

    let item = cart.find("x", "hotel").unwrap();
    assert_eq!(item.price, Some(120.0));
    assert_eq!(item.currency.as_deref(), Some("EUR"));
    assert_eq!(item.metadata.get("nights"), Some(&json!(3)));
    assert_eq!(item.metadata.get("room"), Some(&json!("double")));
}

#[test]
fn add_does_not_clear_price_when_new_value_missing() {
    let mut cart = CartState::default();
    cart.add(Some(draft("x", "car", json!(1)).with_price(50.0, Some("USD".to_owned())))).unwrap();
    cart.add(Some(draft("x", "car", json!(1)))).unwrap();
    let item = cart.find("x", "car").unwrap();
    assert_eq!(item.price, Some(50.0));
    assert_eq!(item.currency.as_deref(), Some("USD"));
}

#[test]
fn add_rejects_missing_item_and_missing_id() {
    let mut cart = CartState::default();
    assert_eq!(cart.add(None), Err(CartError::MissingItem));
    assert_eq!(cart.add(Some(CartItemDraft::default())), Err(CartError::MissingId));
    assert_eq!(
        cart.add(Some(CartItemDraft { id: Some(String::new()), ..Default::default() })),
        Err(CartError::MissingId)
    );
    assert!(cart.is_empty());
}

// =============================================================
// remove / clear / count
// =============================================================

#[test]
fn remove_without_type_drops_every_entry_with_id() {
    let mut cart = CartState::default();
    cart.add(Some(draft("x", "hotel", json!(1)))).unwrap();
    cart.add(Some(draft("x", "car", json!(1)))).unwrap();
    cart.add(Some(draft("y", "hotel", json!(1)))).unwrap();
    cart.remove("x", None);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].id, "y");
}

#[test]
fn remove_with_type_drops_only_matching_entry() {
    let mut cart = CartState::default();
    cart.add(Some(draft("x", "hotel", json!(1)))).unwrap();
    cart.add(Some(draft("x", "car", json!(1)))).unwrap();
    cart.remove("x", Some("hotel"));
    assert!(cart.find("x", "hotel").is_none());
    assert!(cart.find("x", "car").is_some());
}

#[test]
fn cart_count_sums_quantities_and_is_zero_after_clear() {
    let mut cart = CartState::default();
    cart.add(Some(draft("a", "hotel", json!(2)))).unwrap();
    cart.add(Some(draft("b", "car", json!(3)))).unwrap();
    assert_eq!(cart.cart_count(), 5);
    cart.clear();
    assert_eq!(cart.cart_count(), 0);
}

#[test]
fn subtotals_group_by_currency_and_skip_unpriced() {
    let mut cart = CartState::default();
    cart.add(Some(draft("a", "hotel", json!(2)).with_price(100.0, Some("USD".to_owned())))).unwrap();
    cart.add(Some(draft("b", "car", json!(1)).with_price(30.0, Some("EUR".to_owned())))).unwrap();
    cart.add(Some(draft("c", "tour", json!(1)).with_price(10.0, Some("USD".to_owned())))).unwrap();
    cart.add(Some(draft("d", "restaurant", json!(4)))).unwrap();
    assert_eq!(
        cart.subtotals(),
        vec![
            CurrencyTotal { currency: Some("USD".to_owned()), amount: 210.0 },
            CurrencyTotal { currency: Some("EUR".to_owned()), amount: 30.0 },
        ]
    );
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn every_mutation_persists_full_list() {
    let store = MemoryStore::new();
    let mut cart = CartState::default();

    cart.add_item(&store, Some(draft("a", "hotel", json!(1))));
    assert_eq!(stored_items(&store).as_array().unwrap().len(), 1);

    cart.add_item(&store, Some(draft("b", "car", json!(2))));
    assert_eq!(stored_items(&store)[1]["type"], json!("car"));
    assert_eq!(stored_items(&store)[1]["quantity"], json!(2));

    cart.remove_item(&store, "a", Some("hotel"));
    assert_eq!(stored_items(&store).as_array().unwrap().len(), 1);

    cart.clear_cart(&store);
    assert_eq!(stored_items(&store), json!([]));
}

#[test]
fn rejected_add_does_not_write() {
    let store = MemoryStore::new();
    let mut cart = CartState::default();
    cart.add_item(&store, None);
    assert!(!store.contains(CART_STORAGE_KEY));
}

#[test]
fn restore_round_trips_persisted_cart() {
    let store = MemoryStore::new();
    let mut cart = CartState::default();
    cart.add_item(&store, Some(draft("a", "hotel", json!(2)).with_price(90.0, Some("USD".to_owned()))));
    cart.add_item(&store, Some(draft("b", "car", json!(1))));
    assert_eq!(CartState::restore(&store), cart);
}

#[test]
fn restore_treats_malformed_blob_as_empty() {
    let store = MemoryStore::new();
    store.set_item(CART_STORAGE_KEY, r#"{"id": "a"}"#).unwrap();
    assert!(CartState::restore(&store).is_empty());

    store.set_item(CART_STORAGE_KEY, "[{broken").unwrap();
    assert!(CartState::restore(&store).is_empty());
}

#[test]
fn restore_repairs_duplicate_and_zero_quantity_entries() {
    let store = MemoryStore::new();
    store
        .set_item(
            CART_STORAGE_KEY,
            r#"[{"id": "a", "type": "hotel", "name": "A", "quantity": 0},
                {"id": "a", "type": "hotel", "name": "A", "quantity": 2}]"#,
        )
        .unwrap();
    let cart = CartState::restore(&store);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 3);
}

#[test]
fn restore_normalizes_odd_quantities_without_dropping_other_lines() {
    let store = MemoryStore::new();
    store
        .set_item(
            CART_STORAGE_KEY,
            r#"[{"id": "a", "type": "hotel", "quantity": 2},
                {"id": "b", "type": "car", "quantity": 1.5},
                {"id": "c", "type": "tour", "quantity": -4},
                {"id": "d", "type": "activity", "quantity": "3"}]"#,
        )
        .unwrap();
    let cart = CartState::restore(&store);
    let quantities: Vec<(&str, u32)> = cart.items.iter().map(|i| (i.id.as_str(), i.quantity)).collect();
    assert_eq!(quantities, vec![("a", 2), ("b", 1), ("c", 1), ("d", 3)]);
}

#[test]
fn restore_skips_only_unusable_lines() {
    let store = MemoryStore::new();
    store
        .set_item(
            CART_STORAGE_KEY,
            r#"[{"id": "a", "type": "hotel", "quantity": 1},
                {"id": "", "type": "car", "quantity": 1},
                {"id": "c", "type": "car", "price": "free"},
                "not an item",
                {"id": "e", "type": "car", "quantity": 2}]"#,
        )
        .unwrap();
    let cart = CartState::restore(&store);
    let ids: Vec<&str> = cart.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "e"]);
    assert_eq!(cart.cart_count(), 3);
}

#[test]
fn restore_defaults_missing_type() {
    let store = MemoryStore::new();
    store.set_item(CART_STORAGE_KEY, r#"[{"id": "a", "quantity": 1}]"#).unwrap();
    let cart = CartState::restore(&store);
    assert_eq!(cart.items[0].item_type, DEFAULT_ITEM_TYPE);
}
