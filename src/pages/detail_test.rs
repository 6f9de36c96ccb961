use super::*;

fn hotel() -> Listing {
    Listing {
        id: "h-7".to_owned(),
        name: "Lagoon Suites".to_owned(),
        location: Some("Lagos".to_owned()),
        description: None,
        price: Some(45_000.0),
        currency: Some("NGN".to_owned()),
        image_url: None,
        rating: Some(4.5),
    }
}

#[test]
fn listing_cart_draft_carries_identity_and_price() {
    let draft = listing_cart_draft(ListingKind::Hotel, &hotel(), "2");
    assert_eq!(draft.id.as_deref(), Some("h-7"));
    assert_eq!(draft.item_type.as_deref(), Some("hotel"));
    assert_eq!(draft.name.as_deref(), Some("Lagoon Suites"));
    assert_eq!(draft.price, Some(45_000.0));
    assert_eq!(draft.currency.as_deref(), Some("NGN"));
    assert_eq!(draft.metadata.get("location").and_then(|v| v.as_str()), Some("Lagos"));
}

#[test]
fn listing_cart_draft_quantity_normalizes_in_cart() {
    let mut cart = CartState::default();
    cart.add(Some(listing_cart_draft(ListingKind::Hotel, &hotel(), " 3 "))).unwrap();
    cart.add(Some(listing_cart_draft(ListingKind::Hotel, &hotel(), "abc"))).unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 4);
}

#[test]
fn listing_cart_draft_without_price_leaves_it_unset() {
    let listing = Listing { price: None, currency: None, location: None, ..hotel() };
    let draft = listing_cart_draft(ListingKind::Car, &listing, "1");
    assert_eq!(draft.item_type.as_deref(), Some("car"));
    assert_eq!(draft.price, None);
    assert!(draft.metadata.is_empty());
}
