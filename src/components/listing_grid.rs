//! Grid of catalog cards for one listing kind.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the per-category listing routes and the home page, which swaps
//! the kind whenever the filter tab changes. Each kind change refetches, and
//! only the newest request may write the grid.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::net::types::{Listing, ListingKind};

#[component]
pub fn ListingGrid(#[prop(into)] kind: Signal<Option<ListingKind>>) -> impl IntoView {
    let listings = RwSignal::new(Vec::<Listing>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let seq = RwSignal::new(crate::util::request_seq::RequestSeq::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let issued = seq.get_untracked().next();
        seq.set(issued);
        let ticket = issued.ticket();
        let Some(current) = kind.get() else {
            listings.set(Vec::new());
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_listings(current).await;
            if !seq.try_get_untracked().is_some_and(|s| s.is_current(ticket)) {
                return;
            }
            match result {
                Ok(items) => listings.set(items),
                Err(e) => {
                    log::warn!("listing fetch for {} failed: {e}", current.collection());
                    listings.set(Vec::new());
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    });

    let cards = move || {
        let Some(current) = kind.get() else {
            return Vec::new();
        };
        listings
            .get()
            .into_iter()
            .map(|listing| view! { <ListingCard kind=current listing/> })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="listing-grid">
            <Show when=move || loading.get()>
                <p class="listing-grid__status">"Loading…"</p>
            </Show>
            {move || error.get().map(|msg| view! { <p class="listing-grid__error">{msg}</p> })}
            <Show when=move || !loading.get() && error.get().is_none() && listings.get().is_empty()>
                <p class="listing-grid__status">"Nothing to show yet."</p>
            </Show>
            <div class="listing-grid__cards">{cards}</div>
        </section>
    }
}
