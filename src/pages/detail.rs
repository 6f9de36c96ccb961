//! Detail page for one catalog entry (`/hotel/:id`, `/car-rental/:id`, ...).
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the listing named by the route `id`, offers add-to-cart with a
//! quantity, shows the rating panel, and for cars opens the booking dialog.
//! Moving between ids refetches; a response for an id the route has already
//! left is dropped.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_params_map;

use crate::components::car_booking_modal::CarBookingModal;
use crate::components::listing_card::{format_price, format_rating};
use crate::components::rating_panel::RatingPanel;
use crate::net::types::{Listing, ListingKind};
use crate::state::cart::{CartItemDraft, CartState};
use crate::util::storage::LocalStorage;

/// Cart draft for `listing`. The raw quantity input is passed through so the
/// cart's normalization decides what a blank or bad entry means.
pub(crate) fn listing_cart_draft(kind: ListingKind, listing: &Listing, quantity_input: &str) -> CartItemDraft {
    let mut draft = CartItemDraft::new(listing.id.clone(), kind.entity_type(), listing.name.clone())
        .with_quantity(quantity_input.trim());
    if let Some(price) = listing.price {
        draft = draft.with_price(price, listing.currency.clone());
    }
    if let Some(location) = &listing.location {
        draft = draft.with_metadata("location", location.clone());
    }
    draft
}

#[component]
pub fn DetailPage(kind: ListingKind) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let listing = RwSignal::new(None::<Listing>);
    let error = RwSignal::new(None::<String>);
    let quantity = RwSignal::new("1".to_owned());
    let added = RwSignal::new(false);
    let booking_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let params = use_params_map();
        let seq = RwSignal::new(crate::util::request_seq::RequestSeq::default());
        Effect::new(move || {
            let id = params.read().get("id").unwrap_or_default();
            let issued = seq.get_untracked().next();
            seq.set(issued);
            let ticket = issued.ticket();
            listing.set(None);
            error.set(None);
            added.set(false);
            booking_open.set(false);
            if id.is_empty() {
                return;
            }
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_listing(kind, &id).await;
                if !seq.try_get_untracked().is_some_and(|s| s.is_current(ticket)) {
                    return;
                }
                match result {
                    Ok(found) => listing.set(Some(found)),
                    Err(e) => {
                        log::warn!("{} {id} fetch failed: {e}", kind.entity_type());
                        error.set(Some(e.user_message()));
                    }
                }
            });
        });
    }

    let on_add = move |_| {
        let Some(current) = listing.get_untracked() else {
            return;
        };
        let draft = listing_cart_draft(kind, &current, &quantity.get_untracked());
        cart.update(|c| c.add_item(&LocalStorage, Some(draft)));
        added.set(true);
    };

    let body = move || {
        let current = listing.get()?;
        let price = format_price(current.price, current.currency.as_deref());
        let rating = format_rating(current.rating);
        let entity_id = current.id.clone();
        let car = current.clone();
        Some(view! {
            <article class="detail">
                {current.image_url.map(|src| view! { <img class="detail__image" src=src alt=""/> })}
                <h1>{current.name}</h1>
                {current.location.map(|loc| view! { <p class="detail__location">{loc}</p> })}
                {rating.map(|r| view! { <p class="detail__rating">{r}</p> })}
                {current.description.map(|d| view! { <p class="detail__description">{d}</p> })}
                <p class="detail__price">{price}</p>

                <div class="detail__actions">
                    <label>
                        "Quantity"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || quantity.get()
                            on:input=move |ev| {
                                quantity.set(event_target_value(&ev));
                                added.set(false);
                            }
                        />
                    </label>
                    <button class="btn" on:click=on_add>"Add to cart"</button>
                    {(kind == ListingKind::Car)
                        .then(|| {
                            view! {
                                <button class="btn btn--primary" on:click=move |_| booking_open.set(true)>
                                    "Book now"
                                </button>
                            }
                        })}
                </div>
                <Show when=move || added.get()>
                    <p class="detail__added">"Added to cart."</p>
                </Show>

                <RatingPanel entity_type=kind.entity_type() entity_id/>

                {move || {
                    (booking_open.get() && kind == ListingKind::Car)
                        .then(|| {
                            let on_close = Callback::new(move |()| booking_open.set(false));
                            view! { <CarBookingModal car=car.clone() on_close/> }
                        })
                }}
            </article>
        })
    };

    view! {
        <div class="detail-page">
            {move || error.get().map(|msg| view! { <p class="detail-page__error">{msg}</p> })}
            <Show when=move || listing.get().is_none() && error.get().is_none()>
                <p class="detail-page__status">"Loading…"</p>
            </Show>
            {body}
        </div>
    }
}
