//! Top navigation bar with cart badge and session controls.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::session::SessionState;
use crate::util::storage::LocalStorage;

/// Badge text for the cart link; hidden when the cart is empty.
pub(crate) fn cart_badge_label(count: u64) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_owned()),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let badge = move || cart_badge_label(cart.get().cart_count());
    let greeting = move || session.get().display_name().map(|name| format!("Hi, {name}"));

    let on_logout = move |_| session.update(|s| s.logout(&LocalStorage));

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">"Tripnest"</a>
            <nav class="nav-bar__links">
                <a href="/cart" class="nav-bar__cart">
                    "Cart"
                    {move || badge().map(|label| view! { <span class="nav-bar__badge">{label}</span> })}
                </a>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| view! { <a href="/login" class="nav-bar__login">"Log in"</a> }
                >
                    <span class="nav-bar__user">{greeting}</span>
                    <button class="btn nav-bar__logout" on:click=on_logout>"Log out"</button>
                </Show>
            </nav>
        </header>
    }
}
