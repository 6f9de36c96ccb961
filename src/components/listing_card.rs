//! Catalog card linking to a listing's detail page.

#[cfg(test)]
#[path = "listing_card_test.rs"]
mod listing_card_test;

use leptos::prelude::*;

use crate::booking::pricing::format_amount;
use crate::net::types::{Listing, ListingKind};

/// `"85,000 KRW"`, `"120"`, or `"Price on request"`.
pub fn format_price(price: Option<f64>, currency: Option<&str>) -> String {
    match (price, currency) {
        (Some(price), Some(currency)) => format!("{} {currency}", format_amount(price)),
        (Some(price), None) => format_amount(price),
        (None, _) => "Price on request".to_owned(),
    }
}

/// `"4.3 ★"`, or `None` when unrated.
pub fn format_rating(rating: Option<f64>) -> Option<String> {
    rating.filter(|r| *r > 0.0).map(|r| format!("{r:.1} ★"))
}

#[component]
pub fn ListingCard(kind: ListingKind, listing: Listing) -> impl IntoView {
    let href = kind.detail_path(&listing.id);
    let price = format_price(listing.price, listing.currency.as_deref());
    let rating = format_rating(listing.rating);

    view! {
        <a href=href class="listing-card">
            {listing.image_url.map(|src| view! { <img class="listing-card__image" src=src alt=""/> })}
            <div class="listing-card__body">
                <h3 class="listing-card__name">{listing.name}</h3>
                {listing.location.map(|loc| view! { <p class="listing-card__location">{loc}</p> })}
                <div class="listing-card__meta">
                    <span class="listing-card__price">{price}</span>
                    {rating.map(|r| view! { <span class="listing-card__rating">{r}</span> })}
                </div>
            </div>
        </a>
    }
}
