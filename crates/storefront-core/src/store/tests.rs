//! Cart Store Tests
//!
//! Persistence scenarios against in-memory and failing storage.

use crate::cart::Cart;
use crate::config::{CartConfig, DEFAULT_STORAGE_KEY};
use crate::error::{CartError, CartResult};
use crate::storage::{MemoryStorage, StoragePort};
use crate::store::CartStore;

/// Storage whose every call fails
struct BrokenStorage;

impl StoragePort for BrokenStorage {
    fn get(&self, _key: &str) -> CartResult<Option<String>> {
        Err(CartError::StorageUnavailable("disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> CartResult<()> {
        Err(CartError::Write("quota exceeded".to_string()))
    }
}

fn setup_store() -> CartStore<MemoryStorage> {
    CartStore::new(MemoryStorage::new(), CartConfig::default())
}

#[test]
fn test_missing_key_loads_empty() {
    let store = setup_store();
    assert!(store.cart().is_empty());
    assert!(store.load_cart().is_empty());
}

#[test]
fn test_malformed_data_loads_empty() {
    for raw in ["not json", "{\"id\":\"pan\"}", "null", "\"text\"", "3"] {
        let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, raw);
        let store = CartStore::new(storage, CartConfig::default());
        assert!(store.cart().is_empty(), "expected empty cart for {raw}");
    }
}

#[test]
fn test_save_then_load_round_trip() {
    let store = setup_store();
    let mut cart = Cart::new();
    cart.add_item("Tomate", "$1.50");
    cart.add_item("Café Helado", "$2.25");
    cart.add_item("Tomate", "$1.50");
    cart.add_item("Pan", "0.80");

    store.save_cart(&cart).unwrap();
    assert_eq!(store.load_cart(), cart);
}

#[test]
fn test_mutations_persist_immediately() {
    let storage = MemoryStorage::new();
    let mut store = CartStore::new(&storage, CartConfig::default());
    store.add_item("Tomate", "$1.50");
    store.add_item("Tomate", "$1.50");

    let raw = storage.raw(DEFAULT_STORAGE_KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([{"id": "tomate", "name": "Tomate", "price": 1.5, "qty": 2}])
    );

    store.decrement_item("tomate");
    store.decrement_item("tomate");
    assert_eq!(storage.raw(DEFAULT_STORAGE_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_cart_survives_a_new_store() {
    let storage = MemoryStorage::new();
    {
        let mut store = CartStore::new(&storage, CartConfig::default());
        store.add_item("Pan", "1.00");
        store.increment_item("pan");
    }
    let store = CartStore::new(&storage, CartConfig::default());
    assert_eq!(store.cart().get("pan").map(|item| item.qty), Some(2));
}

#[test]
fn test_custom_storage_key() {
    let storage = MemoryStorage::new();
    let mut store = CartStore::new(&storage, CartConfig::default().with_storage_key("other-cart"));
    store.add_item("Pan", "1.00");
    assert!(storage.raw("other-cart").is_some());
    assert!(storage.raw(DEFAULT_STORAGE_KEY).is_none());
}

#[test]
fn test_remove_item_persists() {
    let mut store = setup_store();
    store.add_item("Pan", "1.00");
    store.add_item("Leche", "2.00");

    let cart = store.remove_item("pan");
    assert!(cart.get("pan").is_none());
    assert_eq!(cart.len(), 1);

    assert_eq!(store.load_cart(), cart);
}

#[test]
fn test_broken_storage_degrades_to_memory() {
    let mut store = CartStore::new(BrokenStorage, CartConfig::default());
    assert!(store.cart().is_empty());

    let cart = store.add_item("Pan", "1.00");
    assert_eq!(cart.total_count(), 1);
    let cart = store.add_item("Pan", "1.00");
    assert_eq!(cart.total_count(), 2);

    assert!(matches!(store.save_cart(&cart), Err(CartError::Write(_))));
}
