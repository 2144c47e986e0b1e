//! Dark mode toggle wiring and preference persistence.

use deposit_site::PageConfig;
use deposit_site::theme::{DARK_CLASS, Theme};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, Storage};

use crate::events::EventBinding;

/// Restore the stored theme and wire the toggle control if the page has one.
///
/// The stored preference is applied to the body even on pages without a
/// toggle; the returned binding is `None` in that case.
pub(crate) fn init(
    document: &Document,
    storage: Option<&Storage>,
    config: &PageConfig,
) -> Option<EventBinding> {
    let stored = storage.and_then(|s| s.get_item(&config.theme_storage_key).ok().flatten());
    let theme = Theme::from_stored(stored.as_deref());

    let toggle = document
        .get_element_by_id(&config.theme_toggle_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    apply(document, toggle.as_ref(), theme);

    let toggle = toggle?;
    let handler = {
        let document = document.clone();
        let storage = storage.cloned();
        let key = config.theme_storage_key.clone();
        let input = toggle.clone();
        Box::new(move |_event: Event| {
            let theme = Theme::from_checked(input.checked());
            apply(&document, Some(&input), theme);
            if let Some(storage) = storage.as_ref() {
                let _ = storage.set_item(&key, theme.as_str());
            }
        }) as Box<dyn FnMut(Event)>
    };
    EventBinding::attach(&toggle, "change", handler).ok()
}

fn apply(document: &Document, toggle: Option<&HtmlInputElement>, theme: Theme) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = if theme.class_active() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
    if let Some(input) = toggle {
        input.set_checked(theme.checked());
    }
}
