//! Cart Manager
//!
//! Session cart shared by the add buttons, the badge and the cart page.
//! Every mutation goes through `CartStore`, which persists it, and is then
//! rendered again from the resulting snapshot.

mod badge;
mod buttons;
mod page;

use leptos::prelude::*;
use storefront_core::{Cart, CartStore};

use crate::config::StorefrontConfig;
use crate::storage::BrowserStorage;

pub use badge::render_badge;
pub use page::render_cart_page;

/// Copyable handle to the cart state, usable from view closures and
/// DOM callbacks alike
#[derive(Clone, Copy)]
pub struct CartManager {
    /// Latest cart snapshot, drives the cart page list
    cart: RwSignal<Cart>,
    store: StoredValue<CartStore<BrowserStorage>>,
    config: StoredValue<StorefrontConfig>,
}

impl CartManager {
    /// Load the persisted cart
    pub fn new(config: StorefrontConfig) -> Self {
        let store = CartStore::new(BrowserStorage, config.cart_config());
        let cart = RwSignal::new(store.cart().clone());
        Self {
            cart,
            store: StoredValue::new(store),
            config: StoredValue::new(config),
        }
    }

    pub fn cart(&self) -> RwSignal<Cart> {
        self.cart
    }

    pub fn config(&self) -> StorefrontConfig {
        self.config.get_value()
    }

    pub fn add_item(&self, name: &str, price_text: &str) {
        self.mutate(|store| store.add_item(name, price_text));
    }

    pub fn increment_item(&self, id: &str) {
        self.mutate(|store| store.increment_item(id));
    }

    pub fn decrement_item(&self, id: &str) {
        self.mutate(|store| store.decrement_item(id));
    }

    pub fn remove_item(&self, id: &str) {
        self.mutate(|store| store.remove_item(id));
    }

    /// Badge and cart page for `cart`
    pub fn render(&self, cart: &Cart) {
        self.config.with_value(|config| {
            render_badge(&config.selectors, cart);
            render_cart_page(&config.selectors, cart);
        });
    }

    fn mutate(&self, transition: impl FnOnce(&mut CartStore<BrowserStorage>) -> Cart) {
        let mut next = None;
        self.store.update_value(|store| next = Some(transition(store)));
        if let Some(cart) = next {
            self.render(&cart);
            self.cart.set(cart);
        }
    }
}

/// Page-load wiring: badge, add and cart buttons, cart page
pub fn init(manager: CartManager) {
    let config = manager.config();

    page::mount_cart_list(manager, &config.selectors);
    manager.render(&manager.cart().get_untracked());

    buttons::wire_add_buttons(manager, &config);
    buttons::wire_cart_button(&config);
}
