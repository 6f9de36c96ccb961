//! Landing page showing the catalog for whichever filter tab is active.

use leptos::prelude::*;

use crate::components::listing_grid::ListingGrid;
use crate::state::filter::FilterState;

#[component]
pub fn HomePage() -> impl IntoView {
    let filter = expect_context::<RwSignal<FilterState>>();
    let kind = Signal::derive(move || filter.get().category().listing_kind());
    let heading = move || filter.get().category().label();

    view! {
        <div class="home-page">
            <h1>"Where to next?"</h1>
            <h2 class="home-page__section">{heading}</h2>
            <ListingGrid kind/>
        </div>
    }
}
