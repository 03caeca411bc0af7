//! Cart Store
//!
//! Owns the session cart and persists it through an injected `StoragePort`
//! after every mutation. Reads fail soft to an empty cart; write failures
//! are logged and the in-memory cart stays authoritative.

#[cfg(test)]
mod tests;

use crate::cart::Cart;
use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::storage::StoragePort;

pub struct CartStore<S: StoragePort> {
    storage: S,
    config: CartConfig,
    cart: Cart,
}

impl<S: StoragePort> CartStore<S> {
    /// Create a store and load the persisted cart
    pub fn new(storage: S, config: CartConfig) -> Self {
        let mut store = Self {
            storage,
            config,
            cart: Cart::new(),
        };
        store.cart = store.load_cart();
        store
    }

    /// Current in-memory cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read the persisted cart.
    ///
    /// Missing, unparseable or non-array data gives an empty cart.
    pub fn load_cart(&self) -> Cart {
        match self.read() {
            Ok(cart) => cart,
            Err(e) => {
                log::warn!("Cart read failed, starting empty: {}", e);
                Cart::new()
            }
        }
    }

    fn read(&self) -> CartResult<Cart> {
        match self.storage.get(&self.config.storage_key)? {
            Some(raw) if !raw.is_empty() => Cart::from_json(&raw),
            _ => Ok(Cart::new()),
        }
    }

    /// Serialize and persist `cart` under the configured key
    pub fn save_cart(&self, cart: &Cart) -> CartResult<()> {
        let raw = cart.to_json()?;
        self.storage
            .set(&self.config.storage_key, &raw)
            .map_err(|e| match e {
                CartError::Write(_) | CartError::StorageUnavailable(_) => e,
                other => CartError::Write(other.to_string()),
            })
    }

    // ========================
    // Mutations
    // ========================

    pub fn add_item(&mut self, name: &str, price_text: &str) -> Cart {
        self.commit(|cart| {
            let item = cart.add_item(name, price_text);
            log::debug!("Added {} (qty {})", item.id, item.qty);
        })
    }

    pub fn increment_item(&mut self, id: &str) -> Cart {
        self.commit(|cart| {
            if !cart.increment_item(id) {
                log::debug!("Increment ignored, no item {}", id);
            }
        })
    }

    pub fn decrement_item(&mut self, id: &str) -> Cart {
        self.commit(|cart| {
            if !cart.decrement_item(id) {
                log::debug!("Decrement ignored, no item {}", id);
            }
        })
    }

    pub fn remove_item(&mut self, id: &str) -> Cart {
        self.commit(|cart| {
            cart.remove_item(id);
        })
    }

    /// Apply a transition, persist, and return a snapshot for rendering
    fn commit(&mut self, transition: impl FnOnce(&mut Cart)) -> Cart {
        transition(&mut self.cart);
        if let Err(e) = self.save_cart(&self.cart) {
            log::error!("Cart write failed, keeping it in memory: {}", e);
        }
        self.cart.clone()
    }
}
