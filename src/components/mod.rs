//! UI Components
//!
//! Leptos components mounted into server-rendered pages.

mod cart_list;

pub use cart_list::CartList;
