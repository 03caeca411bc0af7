//! Browser Storage
//!
//! `StoragePort` over `window.localStorage`.

use storefront_core::{CartError, CartResult, StoragePort};

/// `localStorage` adapter.
///
/// The storage handle is looked up on every call, so a page where storage is
/// disabled still runs with an in-memory cart.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> CartResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| CartError::StorageUnavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| CartError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| CartError::StorageUnavailable("localStorage disabled".to_string()))
    }
}

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| CartError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| CartError::Write(format!("{:?}", e)))
    }
}
