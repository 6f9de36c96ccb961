use super::*;

// =============================================================
// Id normalization
// =============================================================

#[test]
fn listing_accepts_numeric_id() {
    let listing: Listing = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Harbor Inn",
        "price": 85000.0,
        "currency": "KRW"
    }))
    .unwrap();
    assert_eq!(listing.id, "42");
    assert_eq!(listing.price, Some(85000.0));
    assert_eq!(listing.location, None);
}

#[test]
fn listing_accepts_string_id() {
    let listing: Listing = serde_json::from_value(serde_json::json!({ "id": "h-7", "name": "Loft" })).unwrap();
    assert_eq!(listing.id, "h-7");
}

#[test]
fn listing_rejects_fractional_id() {
    let result = serde_json::from_value::<Listing>(serde_json::json!({ "id": 1.5, "name": "x" }));
    assert!(result.is_err());
}

#[test]
fn listing_rejects_boolean_id() {
    let result = serde_json::from_value::<Listing>(serde_json::json!({ "id": true, "name": "x" }));
    assert!(result.is_err());
}

// =============================================================
// Ratings
// =============================================================

#[test]
fn ratings_payload_default_is_empty() {
    let payload = RatingsPayload::default();
    assert!(payload.ratings.is_empty());
    assert_eq!(payload.count, 0);
    assert_eq!(payload.average, 0.0);
}

#[test]
fn ratings_payload_tolerates_missing_fields() {
    let payload: RatingsPayload = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(payload, RatingsPayload::default());
}

#[test]
fn new_rating_omits_missing_comment() {
    let body = NewRating { entity_type: "hotel".to_owned(), entity_id: "3".to_owned(), score: 4, comment: None };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "entity_type": "hotel", "entity_id": "3", "score": 4 })
    );
}

// =============================================================
// ListingKind
// =============================================================

#[test]
fn listing_kind_paths() {
    assert_eq!(ListingKind::Hotel.collection(), "hotels");
    assert_eq!(ListingKind::Car.entity_type(), "car");
    assert_eq!(ListingKind::Hotel.detail_path("42"), "/hotel/42");
    assert_eq!(ListingKind::Car.detail_path("9"), "/car-rental/9");
    assert_eq!(ListingKind::Restaurant.detail_path("r1"), "/restaurant/r1");
}

#[test]
fn envelope_decodes_data_and_message() {
    let env: Envelope<User> = serde_json::from_value(serde_json::json!({
        "data": { "id": 1, "name": "Mina" },
        "message": "ok"
    }))
    .unwrap();
    assert_eq!(env.data.id, "1");
    assert_eq!(env.data.email, None);
    assert_eq!(env.message.as_deref(), Some("ok"));
}
