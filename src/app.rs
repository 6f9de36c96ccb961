//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::filter_bar::FilterBar;
use crate::components::nav_bar::NavBar;
use crate::net::types::ListingKind;
use crate::pages::{cart::CartPage, detail::DetailPage, home::HomePage, listing::ListingPage, login::LoginPage};
use crate::state::{cart::CartState, filter::FilterState, session::SessionState};
use crate::util::storage::LocalStorage;

/// Stylesheet cargo-leptos builds from `style-file` under `output-name`.
pub(crate) const STYLESHEET_HREF: &str = "/pkg/tripnest.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, cart, and filter contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let cart = RwSignal::new(CartState::default());
    let filter = RwSignal::new(FilterState::default());

    provide_context(session);
    provide_context(cart);
    provide_context(filter);

    // Effects only run in the browser, so the server renders the logged-out,
    // empty-cart shell and the persisted state is read once after hydration.
    Effect::new(move || {
        session.set(SessionState::restore(&LocalStorage));
        cart.set(CartState::restore(&LocalStorage));
    });

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title text="Tripnest"/>

        <Router>
            <NavBar/>
            <FilterBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route
                        path=StaticSegment("hotels")
                        view=|| view! { <ListingPage kind=ListingKind::Hotel/> }
                    />
                    <Route
                        path=(StaticSegment("hotel"), ParamSegment("id"))
                        view=|| view! { <DetailPage kind=ListingKind::Hotel/> }
                    />
                    <Route
                        path=StaticSegment("car-rentals")
                        view=|| view! { <ListingPage kind=ListingKind::Car/> }
                    />
                    <Route
                        path=(StaticSegment("car-rental"), ParamSegment("id"))
                        view=|| view! { <DetailPage kind=ListingKind::Car/> }
                    />
                    <Route
                        path=StaticSegment("eating-out")
                        view=|| view! { <ListingPage kind=ListingKind::Restaurant/> }
                    />
                    <Route
                        path=(StaticSegment("restaurant"), ParamSegment("id"))
                        view=|| view! { <DetailPage kind=ListingKind::Restaurant/> }
                    />
                    <Route
                        path=StaticSegment("activities")
                        view=|| view! { <ListingPage kind=ListingKind::Activity/> }
                    />
                    <Route
                        path=(StaticSegment("activities"), ParamSegment("id"))
                        view=|| view! { <DetailPage kind=ListingKind::Activity/> }
                    />
                    <Route
                        path=StaticSegment("tour-packages")
                        view=|| view! { <ListingPage kind=ListingKind::Tour/> }
                    />
                    <Route
                        path=(StaticSegment("tour-packages"), ParamSegment("id"))
                        view=|| view! { <DetailPage kind=ListingKind::Tour/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
