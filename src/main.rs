#![allow(warnings)]
//! Green Go Storefront Entry Point
//!
//! Enhances the server-rendered pages once the DOM is ready: cart badge,
//! add-to-cart buttons, the cart page and the catalog filter bar.

mod cart;
mod catalog;
mod components;
mod config;
mod dom;
mod logger;
mod storage;

use cart::CartManager;
use leptos::prelude::*;
use config::StorefrontConfig;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::DEFAULT_LEVEL);
    dom::on_ready(start);
}

fn start() {
    let config = StorefrontConfig::from_page();
    logger::set_level(config.log_level());

    let manager = CartManager::new(config.clone());
    cart::init(manager);
    catalog::init(&config.selectors);

    log::info!("Storefront ready, {} item(s) in cart", manager.cart().with_untracked(|cart| cart.total_count()));
}
