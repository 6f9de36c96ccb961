//! Catalog page for a single listing kind (`/hotels`, `/car-rentals`, ...).

use leptos::prelude::*;

use crate::components::listing_grid::ListingGrid;
use crate::net::types::ListingKind;

pub(crate) fn listing_heading(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::Hotel => "Places to stay",
        ListingKind::Car => "Car rentals",
        ListingKind::Restaurant => "Eating out",
        ListingKind::Activity => "Activities",
        ListingKind::Tour => "Tour packages",
    }
}

#[component]
pub fn ListingPage(kind: ListingKind) -> impl IntoView {
    view! {
        <div class="listing-page">
            <h1>{listing_heading(kind)}</h1>
            <ListingGrid kind=Signal::derive(move || Some(kind))/>
        </div>
    }
}
