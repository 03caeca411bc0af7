//! Page Configuration
//!
//! Markup selectors and tunables, overridable per page through an inline
//! `<script type="application/json" id="storefront-config">` element.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use storefront_core::CartConfig;

use crate::dom;

/// Id of the optional inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

/// Storefront settings; every field falls back to its default when omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Storage key holding the serialized cart
    pub storage_key: String,
    /// Where the cart button navigates
    pub cart_page_url: String,
    /// How long the add button keeps its `added` class
    pub added_pulse_ms: u32,
    /// Name used when a card has no name element
    pub default_product_name: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: Option<String>,
    pub selectors: Selectors,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: CartConfig::default().storage_key,
            cart_page_url: "cart.html".to_string(),
            added_pulse_ms: 220,
            default_product_name: "Producto".to_string(),
            log_level: None,
            selectors: Selectors::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the inline config element, falling back to defaults.
    pub fn from_page() -> Self {
        let Some(raw) = dom::query(&format!("#{}", CONFIG_ELEMENT_ID)).and_then(|el| el.text_content()) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("Loaded page config");
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed page config: {}", e);
                Self::default()
            }
        }
    }

    pub fn cart_config(&self) -> CartConfig {
        CartConfig::default().with_storage_key(self.storage_key.clone())
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level).ok())
            .unwrap_or(crate::logger::DEFAULT_LEVEL)
    }
}

/// CSS selectors, attribute names and class names of the markup contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    // Product cards
    pub product_card: String,
    /// Tried in order; the first match supplies the product name
    pub product_name: Vec<String>,
    pub product_price: String,
    pub add_button: String,
    pub category_attr: String,

    // Cart chrome
    pub badge: String,
    pub cart_button: String,

    // Cart page
    pub cart_page: String,
    pub cart_list: String,
    pub cart_total: String,
    pub cart_empty: String,

    // Catalog filter
    pub filter_bar: String,
    pub filter_button: String,
    pub filter_attr: String,

    // Classes
    pub active_class: String,
    pub pop_class: String,
    pub added_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            product_card: ".product-card".to_string(),
            product_name: vec![".product-info h4".to_string(), "h3".to_string(), "h4".to_string()],
            product_price: ".price".to_string(),
            add_button: ".btn-add".to_string(),
            category_attr: "data-cat".to_string(),
            badge: ".cart-badge".to_string(),
            cart_button: ".cart-btn".to_string(),
            cart_page: ".cart-page".to_string(),
            cart_list: ".cart-list".to_string(),
            cart_total: ".cart-total".to_string(),
            cart_empty: ".cart-empty".to_string(),
            filter_bar: ".filter-bar".to_string(),
            filter_button: ".filter-btn".to_string(),
            filter_attr: "data-filter".to_string(),
            active_class: "active".to_string(),
            pop_class: "pop".to_string(),
            added_class: "added".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_markup() {
        let config = StorefrontConfig::default();
        assert_eq!(config.storage_key, "green-go-cart");
        assert_eq!(config.cart_page_url, "cart.html");
        assert_eq!(config.added_pulse_ms, 220);
        assert_eq!(config.selectors.product_name[0], ".product-info h4");
        assert_eq!(config.cart_config().storage_key, "green-go-cart");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = StorefrontConfig::from_json(
            r##"{"storage_key":"demo-cart","selectors":{"badge":"#badge"}}"##,
        )
        .unwrap();
        assert_eq!(config.storage_key, "demo-cart");
        assert_eq!(config.selectors.badge, "#badge");
        assert_eq!(config.selectors.cart_list, ".cart-list");
        assert_eq!(config.default_product_name, "Producto");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(StorefrontConfig::from_json("{storage_key:").is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = StorefrontConfig::default();
        config.log_level = Some("warn".to_string());
        assert_eq!(config.log_level(), LevelFilter::Warn);
        config.log_level = Some("loud".to_string());
        assert_eq!(config.log_level(), crate::logger::DEFAULT_LEVEL);
    }
}
