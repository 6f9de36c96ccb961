//! Cart review page: line items, per-currency subtotals, remove and clear.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::components::listing_card::format_price;
use crate::state::cart::{CartItem, CartState, CurrencyTotal};
use crate::util::storage::LocalStorage;

pub(crate) fn line_total_label(item: &CartItem) -> Option<String> {
    let price = item.price?;
    Some(format_price(Some(price * f64::from(item.quantity)), item.currency.as_deref()))
}

pub(crate) fn subtotal_label(total: &CurrencyTotal) -> String {
    format_price(Some(total.amount), total.currency.as_deref())
}

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let rows = move || {
        cart.get()
            .items
            .into_iter()
            .map(|item| {
                let id = item.id.clone();
                let item_type = item.item_type.clone();
                let total = line_total_label(&item);
                view! {
                    <li class="cart__item">
                        <span class="cart__name">{item.name}</span>
                        <span class="cart__type">{item.item_type}</span>
                        <span class="cart__qty">{format!("× {}", item.quantity)}</span>
                        {total.map(|t| view! { <span class="cart__total">{t}</span> })}
                        <button
                            class="btn btn--small"
                            on:click=move |_| cart.update(|c| c.remove_item(&LocalStorage, &id, Some(item_type.as_str())))
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let subtotals = move || {
        cart.get()
            .subtotals()
            .iter()
            .map(|t| view! { <li class="cart__subtotal">{subtotal_label(t)}</li> })
            .collect_view()
    };

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            <Show
                when=move || !cart.get().is_empty()
                fallback=|| view! { <p class="cart-page__empty">"Your cart is empty."</p> }
            >
                <p class="cart-page__count">{move || format!("{} item(s)", cart.get().cart_count())}</p>
                <ul class="cart__items">{rows}</ul>
                <ul class="cart__subtotals">{subtotals}</ul>
                <button class="btn" on:click=move |_| cart.update(|c| c.clear_cart(&LocalStorage))>
                    "Clear cart"
                </button>
            </Show>
        </div>
    }
}
