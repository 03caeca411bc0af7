//! Cart Page
//!
//! The line list is a Leptos view mounted into the page's list container;
//! the total and the empty indicator are plain markup updated in place.

use leptos::mount::mount_to;
use leptos::prelude::*;
use storefront_core::{format_amount, Cart};

use super::CartManager;
use crate::components::CartList;
use crate::config::Selectors;
use crate::dom;

fn on_cart_page(selectors: &Selectors) -> bool {
    dom::query(&selectors.cart_page).is_some()
}

/// Replace the list container's content with the reactive line list
pub fn mount_cart_list(manager: CartManager, selectors: &Selectors) {
    if !on_cart_page(selectors) {
        return;
    }
    let Some(list) = dom::query_html(&selectors.cart_list) else {
        log::debug!("Cart page without a list container");
        return;
    };
    list.set_inner_html("");
    mount_to(list, move || view! { <CartList manager=manager /> }).forget();
}

/// Total and empty indicator for `cart`; no-op off the cart page
pub fn render_cart_page(selectors: &Selectors, cart: &Cart) {
    if !on_cart_page(selectors) {
        return;
    }
    let (Some(_list), Some(total)) = (dom::query(&selectors.cart_list), dom::query(&selectors.cart_total)) else {
        return;
    };
    let empty = dom::query(&selectors.cart_empty);

    if cart.is_empty() {
        if let Some(empty) = &empty {
            dom::set_display(empty, "block");
        }
        total.set_text_content(Some("0.00"));
    } else {
        if let Some(empty) = &empty {
            dom::set_display(empty, "none");
        }
        total.set_text_content(Some(&format_amount(cart.total_price())));
    }
}
