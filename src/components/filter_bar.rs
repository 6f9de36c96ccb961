//! Category tab bar driven by the current route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits inside the router so it can watch the location. Every path change
//! re-derives `FilterState`; tab clicks override the category. On the home
//! page a tab swaps the listing in place, elsewhere it follows its link.

#[cfg(test)]
#[path = "filter_bar_test.rs"]
mod filter_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::filter::{FilterCategory, FilterState};

/// Whether a tab click should stay on the current page instead of following
/// the tab's link.
pub(crate) fn switches_in_place(current_path: &str) -> bool {
    current_path == "/"
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let filter = expect_context::<RwSignal<FilterState>>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        let path = pathname.get();
        filter.update(|f| {
            f.on_navigate(&path);
        });
    });

    let tabs = move || {
        FilterCategory::TABS
            .into_iter()
            .map(|tab| {
                let on_click = move |ev: leptos::ev::MouseEvent| {
                    if switches_in_place(&pathname.get_untracked()) {
                        ev.prevent_default();
                    }
                    filter.update(|f| f.set_active_category(tab));
                };
                view! {
                    <a
                        href=tab.path()
                        class="filter-bar__tab"
                        class:filter-bar__tab--active=move || filter.get().category() == tab
                        on:click=on_click
                    >
                        {tab.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || filter.get().show()>
            <div class="filter-bar">{tabs}</div>
        </Show>
    }
}
