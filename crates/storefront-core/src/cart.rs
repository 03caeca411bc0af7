//! Cart State
//!
//! Ordered line items unique by id, plus the pure transitions the shell
//! drives from click handlers. No storage or DOM access happens here.

use serde::Serialize;
use serde_json::Value;

use crate::error::{CartError, CartResult};
use crate::item::{sanitize_price, CartItem};
use crate::price::parse_price;
use crate::slug::slugify;

/// Shopping cart in display order.
///
/// Invariants: no two items share an id and every stored `qty` is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the stored JSON form.
    ///
    /// Entries with the wrong shape or a zero quantity are dropped and
    /// duplicate ids are merged into the first occurrence.
    pub fn from_json(raw: &str) -> CartResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Array(entries) = value else {
            return Err(CartError::Read("stored cart is not an array".to_string()));
        };

        let mut cart = Cart::new();
        for entry in entries {
            let Ok(item) = serde_json::from_value::<CartItem>(entry) else {
                log::debug!("skipping malformed cart entry");
                continue;
            };
            if item.qty == 0 {
                continue;
            }
            match cart.find_mut(&item.id) {
                Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
                None => cart.items.push(CartItem {
                    price: sanitize_price(item.price),
                    ..item
                }),
            }
        }
        Ok(cart)
    }

    pub fn to_json(&self) -> CartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    // ========================
    // Transitions
    // ========================

    /// Add one unit of a product read from a card.
    ///
    /// The id is the slug of `name`; an existing line with that id gains one
    /// unit and keeps its original name and price.
    pub fn add_item(&mut self, name: &str, price_text: &str) -> &CartItem {
        let id = slugify(name);
        let price = parse_price(price_text);

        let index = match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.qty = item.qty.saturating_add(1);
                index
            }
            None => {
                self.items.push(CartItem::new(id, name, price));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Returns false when no item has this id.
    pub fn increment_item(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.qty = item.qty.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Take one unit away, removing the line when it reaches zero.
    pub fn decrement_item(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let item = &mut self.items[index];
        item.qty = item.qty.saturating_sub(1);
        if item.qty == 0 {
            self.items.remove(index);
        }
        true
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    // ========================
    // Totals
    // ========================

    /// Sum of quantities across all lines
    pub fn total_count(&self) -> u32 {
        self.items.iter().fold(0u32, |sum, item| sum.saturating_add(item.qty))
    }

    /// Sum of price times quantity
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

/// Total quantity of an optional cart, 0 when there is none.
pub fn total_count(cart: Option<&Cart>) -> u32 {
    cart.map_or(0, Cart::total_count)
}
