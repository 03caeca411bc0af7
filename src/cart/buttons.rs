//! Add-to-Cart and Cart Navigation Buttons
//!
//! Binds the buttons rendered by the page templates.

use web_sys::{Element, MouseEvent};

use super::CartManager;
use crate::config::{Selectors, StorefrontConfig};
use crate::dom;

/// Name and price label read from a product card
#[derive(Debug, Clone, PartialEq)]
struct ProductCard {
    name: String,
    price_text: String,
}

fn read_product_card(card: &Element, selectors: &Selectors, default_name: &str) -> ProductCard {
    let name = dom::query_first_in(card, &selectors.product_name)
        .and_then(|el| dom::text(&el))
        .unwrap_or_else(|| default_name.to_string());
    let price_text = card
        .query_selector(&selectors.product_price)
        .ok()
        .flatten()
        .and_then(|el| dom::text(&el))
        .unwrap_or_default();
    ProductCard { name, price_text }
}

pub fn wire_add_buttons(manager: CartManager, config: &StorefrontConfig) {
    let buttons = dom::query_all(&config.selectors.add_button);
    log::debug!("Binding {} add button(s)", buttons.len());

    for button in buttons {
        let selectors = config.selectors.clone();
        let default_name = config.default_product_name.clone();
        let pulse_ms = config.added_pulse_ms;
        let target = button.clone();

        dom::on_click(&button, move |ev: MouseEvent| {
            ev.prevent_default();
            match dom::closest(&target, &selectors.product_card) {
                Some(card) => {
                    let product = read_product_card(&card, &selectors, &default_name);
                    manager.add_item(&product.name, &product.price_text);
                }
                None => log::debug!("Add button outside a product card"),
            }
            dom::flash_class(&target, &selectors.added_class, pulse_ms);
        });
    }
}

pub fn wire_cart_button(config: &StorefrontConfig) {
    let Some(button) = dom::query(&config.selectors.cart_button) else { return };
    let url = config.cart_page_url.clone();

    dom::on_click(&button, move |ev: MouseEvent| {
        ev.prevent_default();
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.location().set_href(&url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    });
}
