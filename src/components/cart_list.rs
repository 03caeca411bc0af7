//! Cart List Component
//!
//! Cart page rows with quantity and remove controls.

use leptos::prelude::*;
use storefront_core::{format_amount, CartItem};

use crate::cart::CartManager;

/// All cart rows, rebuilt from the cart snapshot on every change
#[component]
pub fn CartList(manager: CartManager) -> impl IntoView {
    let cart = manager.cart();

    view! {
        {move || {
            cart.with(|cart| cart.items().to_vec())
                .into_iter()
                .map(|item| view! { <CartLine item=item manager=manager /> })
                .collect_view()
        }}
    }
}

/// A single cart row
#[component]
fn CartLine(item: CartItem, manager: CartManager) -> impl IntoView {
    let CartItem { id, name, price, qty } = item;
    let dec_id = id.clone();
    let inc_id = id.clone();
    let remove_id = id.clone();

    view! {
        <div class="cart-item" data-id=id>
            <div class="ci-name">{name}</div>
            <div class="ci-qty">
                <button class="ci-dec" aria-label="Disminuir" on:click=move |_| manager.decrement_item(&dec_id)>
                    "−"
                </button>
                <span class="ci-count">{qty}</span>
                <button class="ci-inc" aria-label="Aumentar" on:click=move |_| manager.increment_item(&inc_id)>
                    "+"
                </button>
            </div>
            <div class="ci-price">{format_amount(price)}</div>
            <button class="ci-remove" aria-label="Eliminar" on:click=move |_| manager.remove_item(&remove_id)>
                "✕"
            </button>
        </div>
    }
}
