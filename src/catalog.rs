//! Catalog Filter
//!
//! Category buttons in the filter bar toggle the visibility of product cards.

use std::rc::Rc;

use storefront_core::{initial_selection, is_visible, FilterButton, ALL_CATEGORIES};
use web_sys::Element;

use crate::config::Selectors;
use crate::dom;

fn filter_button(button: &Element, selectors: &Selectors) -> FilterButton {
    FilterButton::new(
        button.get_attribute(&selectors.filter_attr).as_deref(),
        dom::has_class(button, &selectors.active_class),
    )
}

/// Show cards of `category` (or every card for `all`), hide the rest
pub fn apply_filter(cards: &[Element], category: &str, selectors: &Selectors) {
    let mut shown = 0usize;
    for card in cards {
        let card_category = card.get_attribute(&selectors.category_attr);
        if is_visible(category, card_category.as_deref()) {
            dom::set_display(card, "");
            shown += 1;
        } else {
            dom::set_display(card, "none");
        }
    }
    log::debug!("Filter {}: {} of {} card(s) shown", category, shown, cards.len());
}

/// Bind the filter bar and apply the initially active button
pub fn init(selectors: &Selectors) {
    let Some(bar) = dom::query(&selectors.filter_bar) else { return };

    let buttons = Rc::new(dom::query_all_in(&bar, &selectors.filter_button));
    let cards = Rc::new(dom::query_all(&selectors.product_card));

    for button in buttons.iter() {
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        let selectors = selectors.clone();
        let clicked = button.clone();

        dom::on_click(button, move |_| {
            for other in buttons.iter() {
                dom::remove_class(other, &selectors.active_class);
            }
            dom::add_class(&clicked, &selectors.active_class);
            let choice = filter_button(&clicked, &selectors);
            apply_filter(&cards, choice.selected_category(), &selectors);
        });
    }

    let states: Vec<FilterButton> = buttons.iter().map(|button| filter_button(button, selectors)).collect();
    let category = match initial_selection(&states) {
        Some(index) => {
            dom::add_class(&buttons[index], &selectors.active_class);
            states[index].selected_category()
        }
        None => ALL_CATEGORIES,
    };
    apply_filter(&cards, category, selectors);
}
