//! Catalog Filter
//!
//! Visibility rules for product cards and initial filter selection.

/// Filter value that shows every card
pub const ALL_CATEGORIES: &str = "all";

/// Category of a card that declares none
pub const DEFAULT_CARD_CATEGORY: &str = "otros";

/// What the filter logic needs to know about one filter button
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterButton {
    /// Category the button selects, `None` meaning all
    pub category: Option<String>,
    /// Whether the markup already marks it active
    pub active: bool,
}

impl FilterButton {
    pub fn new(category: Option<&str>, active: bool) -> Self {
        Self {
            category: category.map(str::to_string),
            active,
        }
    }

    /// Category to apply when this button is selected
    pub fn selected_category(&self) -> &str {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or(ALL_CATEGORIES)
    }
}

/// Whether a card with `card_category` is shown under `selected`.
pub fn is_visible(selected: &str, card_category: Option<&str>) -> bool {
    let category = card_category
        .filter(|category| !category.is_empty())
        .unwrap_or(DEFAULT_CARD_CATEGORY);
    selected == ALL_CATEGORIES || selected == category
}

/// Index of the button that starts active: the first pre-marked one,
/// else the first button.
pub fn initial_selection(buttons: &[FilterButton]) -> Option<usize> {
    buttons
        .iter()
        .position(|button| button.active)
        .or_else(|| (!buttons.is_empty()).then_some(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_matching_cards_are_visible() {
        let cards = [Some("frutas"), Some("verduras"), Some("otros")];
        let visible: Vec<bool> = cards.iter().map(|cat| is_visible("verduras", *cat)).collect();
        assert_eq!(visible, vec![false, true, false]);
    }

    #[test]
    fn test_all_shows_everything() {
        assert!(is_visible("all", Some("frutas")));
        assert!(is_visible("all", None));
    }

    #[test]
    fn test_missing_category_defaults_to_otros() {
        assert!(is_visible("otros", None));
        assert!(is_visible("otros", Some("")));
        assert!(!is_visible("frutas", None));
    }

    #[test]
    fn test_match_is_exact() {
        assert!(!is_visible("Frutas", Some("frutas")));
        assert!(!is_visible("fruta", Some("frutas")));
    }

    #[test]
    fn test_initial_selection_prefers_marked_button() {
        let buttons = vec![
            FilterButton::new(Some("all"), false),
            FilterButton::new(Some("frutas"), true),
        ];
        assert_eq!(initial_selection(&buttons), Some(1));
        assert_eq!(buttons[1].selected_category(), "frutas");
    }

    #[test]
    fn test_initial_selection_falls_back_to_first() {
        let buttons = vec![FilterButton::new(None, false), FilterButton::new(Some("frutas"), false)];
        assert_eq!(initial_selection(&buttons), Some(0));
        assert_eq!(buttons[0].selected_category(), "all");
        assert_eq!(initial_selection(&[]), None);
    }
}
