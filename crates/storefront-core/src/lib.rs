//! Storefront Core
//!
//! Cart and catalog logic with no browser dependency.
//! The WASM shell injects a `StoragePort` and renders what this crate computes.

mod cart;
mod catalog;
mod config;
mod error;
mod item;
mod price;
mod slug;
mod storage;
mod store;

pub use cart::{total_count, Cart};
pub use catalog::{initial_selection, is_visible, FilterButton, ALL_CATEGORIES, DEFAULT_CARD_CATEGORY};
pub use config::CartConfig;
pub use error::{CartError, CartResult};
pub use item::CartItem;
pub use price::{format_amount, parse_price};
pub use slug::slugify;
pub use storage::{MemoryStorage, StoragePort};
pub use store::CartStore;
