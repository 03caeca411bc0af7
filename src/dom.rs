//! DOM Helpers
//!
//! Thin web-sys wrappers. Lookups return `None` instead of failing so a
//! page without some piece of markup simply skips that feature.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

// ========================
// Queries
// ========================

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent.query_selector_all(selector).map(elements).unwrap_or_default()
}

/// First descendant of `parent` matching any of `selectors`, in order
pub fn query_first_in(parent: &Element, selectors: &[String]) -> Option<Element> {
    selectors
        .iter()
        .find_map(|selector| parent.query_selector(selector).ok().flatten())
}

pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Trimmed text content, `None` when the element has none
pub fn text(element: &Element) -> Option<String> {
    element.text_content().map(|text| text.trim().to_string())
}

// ========================
// Styling
// ========================

/// Set inline `display`; an empty value restores the stylesheet default
pub fn set_display(element: &Element, value: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else { return };
    let style = html.style();
    let result = if value.is_empty() {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", value)
    };
    if let Err(e) = result {
        log::debug!("display update failed: {:?}", e);
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Replay a CSS animation bound to `class` by forcing a reflow between
/// removing and re-adding it
pub fn restart_animation(element: &HtmlElement, class: &str) {
    remove_class(element, class);
    let _ = element.offset_width();
    add_class(element, class);
}

/// Add `class` and remove it again after `millis`
pub fn flash_class(element: &Element, class: &str, millis: u32) {
    add_class(element, class);
    let element = element.clone();
    let class = class.to_string();
    Timeout::new(millis, move || remove_class(&element, &class)).forget();
}

// ========================
// Events
// ========================

/// Bind a click handler for the lifetime of the page
pub fn on_click<F>(element: &Element, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    if let Err(e) = element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref()) {
        log::warn!("click binding failed: {:?}", e);
    }
    callback.forget();
}

/// Run `start` once the document is parsed
pub fn on_ready<F>(start: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        log::warn!("No document, storefront not started");
        return;
    };
    if doc.ready_state() != "loading" {
        start();
        return;
    }
    let callback = Closure::once(start);
    if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref()) {
        log::error!("DOMContentLoaded binding failed: {:?}", e);
    }
    callback.forget();
}
