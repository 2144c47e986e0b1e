//! Smooth scrolling for same-page anchor links.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::events::EventBinding;

/// Bind a click handler to every `a[href^="#"]` present at load time.
///
/// The target is resolved per click, so anchors pointing at elements that
/// appear later still work; clicks on anchors without a match keep the
/// browser's default behaviour.
pub(crate) fn init(document: &Document) -> Vec<EventBinding> {
    let mut bindings = Vec::new();
    let anchors = match document.query_selector_all(r##"a[href^="#"]"##) {
        Ok(list) => list,
        Err(_) => return bindings,
    };
    for index in 0..anchors.length() {
        let Some(anchor) = anchors
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let handler = {
            let document = document.clone();
            let anchor = anchor.clone();
            Box::new(move |event: Event| {
                let Some(selector) = anchor.get_attribute("href") else {
                    return;
                };
                if let Some(target) = document.query_selector(&selector).ok().flatten() {
                    event.prevent_default();
                    scroll_to(&target);
                }
            }) as Box<dyn FnMut(Event)>
        };
        if let Ok(binding) = EventBinding::attach(&anchor, "click", handler) {
            bindings.push(binding);
        }
    }
    bindings
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
