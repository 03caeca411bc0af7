//! Cart Line Item
//!
//! One product in the cart with its quantity.

use serde::{Deserialize, Serialize};

/// A line item as stored under the cart key.
///
/// The `{id, name, price, qty}` shape is shared with any other script
/// reading the same storage key, so field names must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Slug of `name`, unique within a cart
    pub id: String,
    /// Display name as read from the product card
    #[serde(default)]
    pub name: String,
    /// Unit price, currency agnostic
    #[serde(default)]
    pub price: f64,
    /// Quantity, at least 1 while the item is in a cart
    #[serde(default)]
    pub qty: u32,
}

impl CartItem {
    /// Create a new line item with quantity 1
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: sanitize_price(price),
            qty: 1,
        }
    }

    /// Price times quantity
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Prices are non-negative and finite.
pub(crate) fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_at_one() {
        let item = CartItem::new("tomate", "Tomate", 1.5);
        assert_eq!(item.qty, 1);
        assert_eq!(item.subtotal(), 1.5);
    }

    #[test]
    fn test_negative_price_is_clamped() {
        let item = CartItem::new("x", "X", -3.0);
        assert_eq!(item.price, 0.0);
        assert_eq!(CartItem::new("y", "Y", f64::NAN).price, 0.0);
    }

    #[test]
    fn test_storage_shape() {
        let item = CartItem::new("pan", "Pan", 2.0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": "pan", "name": "Pan", "price": 2.0, "qty": 1}));
    }

    #[test]
    fn test_missing_fields_default() {
        let item: CartItem = serde_json::from_str(r#"{"id":"pan"}"#).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.price, 0.0);
        assert_eq!(item.qty, 0);
    }
}
