//! Storage Port
//!
//! String key/value interface the cart is persisted through.
//! The browser shell implements it over `localStorage`; tests use `MemoryStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CartResult;

/// Synchronous string key/value storage
pub trait StoragePort {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> CartResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> CartResult<()>;
}

impl<S: StoragePort + ?Sized> StoragePort for &S {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory storage for tests and storage-less pages
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one raw value
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.into(), value.into());
        storage
    }

    /// Raw value under `key`, bypassing the port
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
