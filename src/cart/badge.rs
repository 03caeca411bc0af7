//! Cart count badge.

use storefront_core::Cart;

use crate::config::Selectors;
use crate::dom;

/// Text shown on the badge for `count`, `None` when the badge is hidden
pub fn badge_label(count: u32) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Show the total count with a pop animation, or hide the badge at zero
pub fn render_badge(selectors: &Selectors, cart: &Cart) {
    let Some(badge) = dom::query_html(&selectors.badge) else { return };

    match badge_label(cart.total_count()) {
        Some(label) => {
            badge.set_text_content(Some(&label));
            dom::set_display(&badge, "inline-block");
            dom::restart_animation(&badge, &selectors.pop_class);
        }
        None => {
            dom::set_display(&badge, "none");
            badge.set_text_content(Some("0"));
        }
    }
}
